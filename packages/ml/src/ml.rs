use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod prediction;
pub mod report;

pub use config::{ClassificationOptions, EvaluationConfig};
pub use dataset::{Examples, InMemoryDataset, LabeledDataset, LabeledExample, NdarrayDataset};
pub use error::{EvalError, EvalResult, LabelRole};
pub use metrics::accuracy::{evaluate_classification, evaluate_classification_with};
pub use metrics::confusion_matrix::ConfusionMatrix;
pub use metrics::regression_metrics::{evaluate_regression, evaluate_regression_with_mean};
pub use prediction::Model;
#[cfg(feature = "linfa")]
pub use prediction::{AsScore, LinfaClassifier, LinfaRegressor};
pub use report::render_prediction_table;

// ============================================================================
// Evaluation Result Types
// ============================================================================

/// Regression evaluation result
///
/// `r2` is `1 - u/v` where `u` is the residual sum of squares and `v` the total
/// sum of squares around the mean label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegressionScore {
    /// R² coefficient of determination
    pub r2: f64,
    /// Residual sum of squares, `Σ(true - predicted)²`
    pub residual_sum_of_squares: f64,
    /// Total sum of squares, `Σ(true - mean)²`
    pub total_sum_of_squares: f64,
    /// Mean label the total sum of squares was taken around
    pub mean_label: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Number of samples evaluated
    pub n_samples: usize,
}

/// One scored example, kept when per-example logging is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionRecord {
    /// Raw model output before conversion to a class index
    pub raw: f64,
    /// Predicted class index
    pub predicted: usize,
    /// True class index
    pub truth: usize,
}

impl PredictionRecord {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.truth
    }
}

/// Classification evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationReport {
    /// Accuracy score (0.0 to 1.0)
    pub accuracy: f64,
    /// Number of examples where prediction and truth differ
    pub error_count: usize,
    /// Total number of examples scored
    pub total_count: usize,
    /// Precision of class 0; only defined for two classes with a non-zero denominator
    pub precision: Option<f64>,
    /// Recall of class 0; only defined for two classes with a non-zero denominator
    pub recall: Option<f64>,
    /// Counts indexed by `[predicted][truth]`
    pub confusion_matrix: ConfusionMatrix,
    /// Per-example log, in dataset order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<PredictionRecord>>,
}

impl ClassificationReport {
    pub fn correct_count(&self) -> usize {
        self.total_count - self.error_count
    }
}
