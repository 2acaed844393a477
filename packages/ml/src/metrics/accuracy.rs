//! Classification scoring
//!
//! Scores a classifier in one pass, filling a confusion matrix and counting errors.
//! Accuracy = 1 - (errors / total). Precision and recall are reported for the
//! two-class case with class 0 as the positive class.

use crate::config::ClassificationOptions;
use crate::dataset::LabeledDataset;
use crate::error::{EvalError, EvalResult, LabelRole};
use crate::metrics::confusion_matrix::ConfusionMatrix;
use crate::prediction::Model;
use crate::{ClassificationReport, PredictionRecord};

/// Score `model` against `dataset` with class indices in `0..num_classes`
pub fn evaluate_classification<M, D>(
    model: &M,
    dataset: &D,
    num_classes: usize,
) -> EvalResult<ClassificationReport>
where
    M: Model + ?Sized,
    D: LabeledDataset + ?Sized,
{
    evaluate_classification_with(model, dataset, &ClassificationOptions::new(num_classes))
}

#[tracing::instrument(
    name = "evaluate_classification",
    skip(model, dataset),
    level = "debug"
)]
pub fn evaluate_classification_with<M, D>(
    model: &M,
    dataset: &D,
    options: &ClassificationOptions,
) -> EvalResult<ClassificationReport>
where
    M: Model + ?Sized,
    D: LabeledDataset + ?Sized,
{
    let num_classes = options.num_classes;
    if num_classes == 0 {
        return Err(EvalError::InvalidClassCount(num_classes));
    }

    let mut matrix = ConfusionMatrix::new(num_classes);
    let mut error_count = 0usize;
    let mut total_count = 0usize;
    let mut predictions = options.record_predictions.then(Vec::new);

    for (index, example) in dataset.examples().enumerate() {
        let example = example?;

        let raw = model.predict(example.features());
        let predicted = class_index(raw, num_classes).ok_or(EvalError::LabelOutOfRange {
            index,
            role: LabelRole::Predicted,
            value: raw,
            num_classes,
        })?;
        let truth =
            truth_index(example.label(), num_classes).ok_or(EvalError::LabelOutOfRange {
                index,
                role: LabelRole::Truth,
                value: example.label(),
                num_classes,
            })?;

        let recorded = matrix.record(predicted, truth);
        debug_assert!(recorded);
        if predicted != truth {
            error_count += 1;
        }
        total_count += 1;

        tracing::trace!(index, raw, predicted, truth, "Scored example");
        if let Some(log) = predictions.as_mut() {
            log.push(PredictionRecord {
                raw,
                predicted,
                truth,
            });
        }
    }

    if total_count == 0 {
        return Err(EvalError::EmptyDataset);
    }

    let accuracy = 1.0 - error_count as f64 / total_count as f64;
    let precision = matrix.binary_precision();
    let recall = matrix.binary_recall();

    if num_classes == 2 && (precision.is_none() || recall.is_none()) {
        tracing::warn!(
            "Precision or recall undefined: no examples predicted or labelled as class 0"
        );
    }

    tracing::debug!(
        "Accuracy: {:.4} ({}/{} correct, {} errors)",
        accuracy,
        total_count - error_count,
        total_count,
        error_count
    );

    Ok(ClassificationReport {
        accuracy,
        error_count,
        total_count,
        precision,
        recall,
        confusion_matrix: matrix,
        predictions,
    })
}

/// Round a model output to a class index in `0..num_classes`
///
/// Negative, non-finite and too-large values have no index.
pub fn class_index(value: f64, num_classes: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < 0.0 || rounded >= num_classes as f64 {
        return None;
    }
    Some(rounded as usize)
}

/// Class index of a ground-truth label; only exact integers in range qualify
pub fn truth_index(value: f64, num_classes: usize) -> Option<usize> {
    if value.fract() != 0.0 {
        return None;
    }
    class_index(value, num_classes)
}
