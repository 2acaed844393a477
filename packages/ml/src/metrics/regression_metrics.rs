//! Regression scoring
//!
//! Calculates the coefficient of determination R² = 1 - u/v, where u is the
//! residual sum of squares Σ(y_true - y_pred)² and v is the total sum of squares
//! Σ(y_true - mean)². The best score is 1.0, a model that always predicts the mean
//! scores 0.0, and arbitrarily bad models go negative. MSE, RMSE and MAE come
//! from the same pass.

use crate::RegressionScore;
use crate::dataset::LabeledDataset;
use crate::error::{EvalError, EvalResult, LabelRole};
use crate::prediction::Model;

/// Score `model` against `dataset`
///
/// Makes two passes: one for the mean label, one for the residuals.
#[tracing::instrument(name = "evaluate_regression", skip_all, level = "debug")]
pub fn evaluate_regression<M, D>(model: &M, dataset: &D) -> EvalResult<RegressionScore>
where
    M: Model + ?Sized,
    D: LabeledDataset + ?Sized,
{
    let mut n_samples = 0usize;
    let mut label_sum = 0.0;
    let mut first_label: Option<f64> = None;
    let mut all_identical = true;

    for (index, example) in dataset.examples().enumerate() {
        let label = finite(example?.label(), index, LabelRole::Truth)?;
        match first_label {
            None => first_label = Some(label),
            Some(first) => all_identical &= label == first,
        }
        label_sum += label;
        n_samples += 1;
    }

    let Some(first_label) = first_label else {
        return Err(EvalError::EmptyDataset);
    };
    if all_identical {
        return Err(EvalError::UndefinedScore {
            n_samples,
            mean_label: first_label,
        });
    }
    if !label_sum.is_finite() {
        return Err(EvalError::ScoreOverflow { n_samples });
    }

    let mean_label = label_sum / n_samples as f64;
    tracing::debug!("Mean label {:.6} over {} examples", mean_label, n_samples);

    let score = score_against_mean(model, dataset, mean_label)?;
    if score.n_samples != n_samples {
        return Err(EvalError::InconsistentPasses {
            first: n_samples,
            second: score.n_samples,
        });
    }
    Ok(score)
}

/// Score `model` in a single pass, taking the total sum of squares around a
/// mean label computed elsewhere
#[tracing::instrument(name = "evaluate_regression_with_mean", skip(model, dataset), level = "debug")]
pub fn evaluate_regression_with_mean<M, D>(
    model: &M,
    dataset: &D,
    mean_label: f64,
) -> EvalResult<RegressionScore>
where
    M: Model + ?Sized,
    D: LabeledDataset + ?Sized,
{
    score_against_mean(model, dataset, mean_label)
}

fn score_against_mean<M, D>(model: &M, dataset: &D, mean_label: f64) -> EvalResult<RegressionScore>
where
    M: Model + ?Sized,
    D: LabeledDataset + ?Sized,
{
    let mut u = 0.0;
    let mut v = 0.0;
    let mut abs_error_sum = 0.0;
    let mut n_samples = 0usize;
    let mut all_at_mean = true;

    for (index, example) in dataset.examples().enumerate() {
        let example = example?;
        let actual = finite(example.label(), index, LabelRole::Truth)?;
        let predicted = finite(model.predict(example.features()), index, LabelRole::Predicted)?;

        all_at_mean &= actual == mean_label;
        u += (actual - predicted).powi(2);
        v += (actual - mean_label).powi(2);
        abs_error_sum += (actual - predicted).abs();
        n_samples += 1;

        tracing::trace!(index, actual, predicted, "Scored example");
    }

    if n_samples == 0 {
        return Err(EvalError::EmptyDataset);
    }
    // v can underflow to zero for labels a few ulps apart
    if all_at_mean || v == 0.0 {
        return Err(EvalError::UndefinedScore {
            n_samples,
            mean_label,
        });
    }
    if !(u.is_finite() && v.is_finite() && abs_error_sum.is_finite()) {
        return Err(EvalError::ScoreOverflow { n_samples });
    }

    let n = n_samples as f64;
    let r2 = 1.0 - u / v;
    if !r2.is_finite() {
        return Err(EvalError::ScoreOverflow { n_samples });
    }
    let mse = u / n;
    let rmse = mse.sqrt();
    let mae = abs_error_sum / n;

    tracing::debug!(
        "Regression Metrics: R²={:.6}, MSE={:.6}, RMSE={:.6}, MAE={:.6}",
        r2,
        mse,
        rmse,
        mae
    );

    Ok(RegressionScore {
        r2,
        residual_sum_of_squares: u,
        total_sum_of_squares: v,
        mean_label,
        mse,
        rmse,
        mae,
        n_samples,
    })
}

fn finite(value: f64, index: usize, role: LabelRole) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteValue { index, role, value })
    }
}
