//! Scorecard demo
//!
//! Scores a few fixed models against in-memory datasets and prints the reports.
//! Built with `--features linfa` it also fits linfa models on synthetic data and
//! scores those.
//!
//! Configuration comes from the environment:
//! - `RUST_LOG` - log filter, defaults to `info`
//! - `SCORECARD_NUM_CLASSES` - class count for the binary fixture, defaults to 2
//! - `SCORECARD_RECORD_PREDICTIONS` - print the per-example prediction table
//! - `SCORECARD_REPORT_DECIMALS` - decimals in rendered scores

use anyhow::Context;
use ndarray::{Array1, Array2};
use scorecard_ml::{
    ClassificationOptions, EvaluationConfig, InMemoryDataset, NdarrayDataset,
    evaluate_classification_with, evaluate_regression, render_prediction_table,
};
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let config = EvaluationConfig::from_env();
    tracing::info!(
        "Loaded configuration: num_classes={}, record_predictions={}, report_decimals={}",
        config.num_classes,
        config.record_predictions,
        config.report_decimals
    );

    score_regression(&config)?;
    score_binary(&config)?;
    score_multiclass(&config)?;

    #[cfg(feature = "linfa")]
    linfa_models::run(&config)?;

    Ok(())
}

/// Price as a linear function of two features, with a small deterministic wobble
fn synthetic_prices(n: usize) -> anyhow::Result<NdarrayDataset> {
    let mut records = Vec::with_capacity(n * 2);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let rooms = 3.0 + (i % 5) as f64;
        let age = 10.0 + (i * 7 % 60) as f64;
        let wobble = if i % 2 == 0 { 0.5 } else { -0.5 };
        records.extend([rooms, age]);
        labels.push(9.0 * rooms - 0.1 * age + 2.0 + wobble);
    }
    let records = Array2::from_shape_vec((n, 2), records)?;
    Ok(NdarrayDataset::new(records, Array1::from(labels))?)
}

fn score_regression(config: &EvaluationConfig) -> anyhow::Result<()> {
    let dataset = synthetic_prices(40)?;
    let model = |x: &[f64]| 9.0 * x[0] - 0.1 * x[1] + 2.0;

    let score = evaluate_regression(&model, &dataset).context("Regression scoring failed")?;
    println!("== Linear regression");
    println!("{:.*}\n", config.report_decimals, score);
    Ok(())
}

fn score_binary(config: &EvaluationConfig) -> anyhow::Result<()> {
    // (amount, hour) -> 1 when the transaction is fraudulent
    let dataset = InMemoryDataset::from_pairs(vec![
        (vec![12.0, 14.0], 0.0),
        (vec![40.0, 10.0], 0.0),
        (vec![900.0, 3.0], 1.0),
        (vec![15.0, 2.0], 0.0),
        (vec![1200.0, 4.0], 1.0),
        (vec![75.0, 18.0], 0.0),
        (vec![640.0, 13.0], 1.0),
        (vec![30.0, 1.0], 1.0),
    ])?;
    let model = |x: &[f64]| if x[0] > 500.0 { 1.0 } else { 0.0 };
    let options = config.classification_options();

    let report = evaluate_classification_with(&model, &dataset, &options)
        .context("Binary classification scoring failed")?;
    println!("== Binary classification");
    if let Some(log) = &report.predictions {
        println!("{}", render_prediction_table(log, config.report_decimals));
    }
    println!("{:.*}\n", config.report_decimals, report);
    println!(
        "{}",
        report
            .confusion_matrix
            .render_labeled(&["NO FRAUD", "FRAUD"])
    );
    Ok(())
}

fn score_multiclass(config: &EvaluationConfig) -> anyhow::Result<()> {
    let dataset = InMemoryDataset::from_pairs(vec![
        (vec![5.1, 3.5, 1.4, 0.2], 0.0),
        (vec![4.9, 3.0, 1.4, 0.2], 0.0),
        (vec![7.0, 3.2, 4.7, 1.4], 1.0),
        (vec![6.4, 3.2, 4.5, 1.5], 1.0),
        (vec![6.3, 3.3, 6.0, 2.5], 2.0),
        (vec![5.8, 2.7, 5.1, 1.9], 2.0),
    ])?;
    let model = |x: &[f64]| {
        if x[2] < 2.5 {
            0.0
        } else if x[3] < 1.75 {
            1.0
        } else {
            2.0
        }
    };
    // three species regardless of the configured class count
    let options = ClassificationOptions {
        num_classes: 3,
        ..config.classification_options()
    };

    let report = evaluate_classification_with(&model, &dataset, &options)
        .context("Multi-class scoring failed")?;
    println!("== Multi-class classification");
    if let Some(log) = &report.predictions {
        println!("{}", render_prediction_table(log, 0));
    }
    println!("{:.*}\n", config.report_decimals, report);
    Ok(())
}

#[cfg(feature = "linfa")]
mod linfa_models {
    use anyhow::Context;
    use linfa::prelude::*;
    use linfa_clustering::KMeans;
    use linfa_linear::LinearRegression;
    use ndarray::{Array1, Array2, s};
    use scorecard_ml::{
        EvaluationConfig, LinfaClassifier, LinfaRegressor, evaluate_classification,
        evaluate_regression,
    };

    pub fn run(config: &EvaluationConfig) -> anyhow::Result<()> {
        let prices = super::synthetic_prices(60)?;
        let records = prices.records();
        let labels = prices.labels();

        let train = Dataset::new(
            records.slice(s![..40, ..]).to_owned(),
            labels.slice(s![..40]).to_owned(),
        );
        let test = Dataset::new(
            records.slice(s![40.., ..]).to_owned(),
            labels.slice(s![40..]).to_owned(),
        );

        tracing::info!("Fitting linear regression on {} rows", train.records.nrows());
        let fitted = LinearRegression::new()
            .fit(&train)
            .context("Linear regression fitting failed")?;
        let score = evaluate_regression(&LinfaRegressor::new(fitted), &test)?;
        println!("== linfa linear regression (held-out)");
        println!("{:.*}\n", config.report_decimals, score);

        let points = Array2::from_shape_vec(
            (8, 2),
            vec![
                1.0, 1.2, 0.8, 1.0, 1.1, 0.9, 1.3, 1.1, 8.0, 8.2, 7.9, 8.1, 8.3, 7.8, 8.1, 8.0,
            ],
        )?;
        let truth = Array1::from(vec![0usize, 0, 0, 0, 1, 1, 1, 1]);
        let fitted = KMeans::params(2)
            .fit(&DatasetBase::from(points.clone()))
            .context("KMeans fitting failed")?;
        let report =
            evaluate_classification(&LinfaClassifier::new(fitted), &Dataset::new(points, truth), 2)?;
        println!("== linfa k-means (cluster ids are arbitrary)");
        println!("{:.*}\n", config.report_decimals, report);
        Ok(())
    }
}
