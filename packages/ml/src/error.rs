//! Error types for model evaluation

use std::fmt;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Which side of an example a label came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Predicted,
    Truth,
}

impl fmt::Display for LabelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelRole::Predicted => write!(f, "predicted"),
            LabelRole::Truth => write!(f, "true"),
        }
    }
}

/// Errors that can occur while scoring a model
#[derive(Error, Debug)]
pub enum EvalError {
    /// The dataset produced no examples
    #[error("Dataset contains no examples")]
    EmptyDataset,

    /// R² has a zero denominator
    #[error(
        "R² is undefined: total sum of squares is zero over {n_samples} examples (every label equals {mean_label})"
    )]
    UndefinedScore { n_samples: usize, mean_label: f64 },

    /// A class index is outside `[0, num_classes)`
    #[error("Example {index}: {role} label {value} is outside the class range [0, {num_classes})")]
    LabelOutOfRange {
        index: usize,
        role: LabelRole,
        value: f64,
        num_classes: usize,
    },

    /// A prediction or label fed into regression scoring is NaN or infinite
    #[error("Example {index}: {role} value {value} is not finite")]
    NonFiniteValue {
        index: usize,
        role: LabelRole,
        value: f64,
    },

    /// Finite inputs whose sums of squares overflowed
    #[error("Sums of squares overflowed over {n_samples} examples")]
    ScoreOverflow { n_samples: usize },

    /// Rows of a confusion matrix do not form a `num_classes` square
    #[error("Confusion matrix is not square: {num_classes} classes, {rows} rows, row lengths {row_lengths:?}")]
    MalformedConfusionMatrix {
        num_classes: usize,
        rows: usize,
        row_lengths: Vec<usize>,
    },

    /// Classification needs at least one class
    #[error("Invalid class count {0}: at least one class is required")]
    InvalidClassCount(usize),

    /// Two passes over the same dataset disagreed on its size
    #[error("Dataset is not restartable: first pass saw {first} examples, second pass saw {second}")]
    InconsistentPasses { first: usize, second: usize },

    /// An example's feature vector has a different length than the first one
    #[error("Example {index} has {actual} features, expected {expected}")]
    FeatureLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Records and labels disagree on the number of rows
    #[error("Shape mismatch: {records} record rows but {labels} labels")]
    ShapeMismatch { records: usize, labels: usize },

    /// The underlying dataset failed while being read
    #[error("Dataset read failed: {message}")]
    Source {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EvalError {
    /// Wrap a storage error raised by a dataset implementation
    pub fn storage<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EvalError::Source {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn storage_message(message: impl Into<String>) -> Self {
        EvalError::Source {
            message: message.into(),
            source: None,
        }
    }
}
