use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for an evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationConfig {
    /// Number of discrete classes for classification scoring
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
    /// Keep a per-example (prediction, truth) log in the classification report
    #[serde(default = "default_record_predictions")]
    pub record_predictions: bool,
    /// Decimal places used when rendering scores
    #[serde(default = "default_report_decimals")]
    pub report_decimals: usize,
}

fn default_num_classes() -> usize {
    2
}
fn default_record_predictions() -> bool {
    false
}
pub(crate) fn default_report_decimals() -> usize {
    4
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            num_classes: default_num_classes(),
            record_predictions: default_record_predictions(),
            report_decimals: default_report_decimals(),
        }
    }
}

impl EvaluationConfig {
    pub fn from_env() -> Self {
        Self {
            num_classes: std::env::var("SCORECARD_NUM_CLASSES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_num_classes),
            record_predictions: std::env::var("SCORECARD_RECORD_PREDICTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_record_predictions),
            report_decimals: std::env::var("SCORECARD_REPORT_DECIMALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_report_decimals),
        }
    }

    pub fn classification_options(&self) -> ClassificationOptions {
        ClassificationOptions {
            num_classes: self.num_classes,
            record_predictions: self.record_predictions,
        }
    }
}

/// Options for a single classification evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationOptions {
    /// Valid class indices are `0..num_classes`
    pub num_classes: usize,
    /// Keep a per-example (prediction, truth) log
    #[serde(default)]
    pub record_predictions: bool,
}

impl ClassificationOptions {
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            record_predictions: false,
        }
    }

    pub fn with_predictions(mut self, record: bool) -> Self {
        self.record_predictions = record;
        self
    }
}
