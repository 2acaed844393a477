//! Labeled datasets the evaluators iterate over
//!
//! - **memory**: a validated `Vec` of examples, also used to buffer single-use sources
//! - **array**: ndarray records plus labels, and linfa datasets behind the `linfa` feature

use crate::error::EvalResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod array;
pub mod memory;

pub use array::NdarrayDataset;
pub use memory::InMemoryDataset;

/// A fixed-length feature vector with its true label
///
/// Features are shared, so cloning an example is cheap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabeledExample {
    features: Arc<[f64]>,
    label: f64,
}

impl LabeledExample {
    pub fn new(features: impl Into<Arc<[f64]>>, label: f64) -> Self {
        LabeledExample {
            features: features.into(),
            label,
        }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> f64 {
        self.label
    }
}

/// One pass over a dataset; an `Err` item aborts the evaluation
pub type Examples<'a> = Box<dyn Iterator<Item = EvalResult<LabeledExample>> + 'a>;

/// A finite source of labeled examples
///
/// Each call to [`examples`](LabeledDataset::examples) starts a new pass from
/// the beginning. Regression scoring makes two passes, so implementations
/// backed by single-use cursors should be buffered with
/// [`InMemoryDataset::buffer`] first.
pub trait LabeledDataset {
    fn examples(&self) -> Examples<'_>;
}

impl<D: LabeledDataset + ?Sized> LabeledDataset for &D {
    fn examples(&self) -> Examples<'_> {
        (**self).examples()
    }
}

impl<D: LabeledDataset + ?Sized> LabeledDataset for Box<D> {
    fn examples(&self) -> Examples<'_> {
        (**self).examples()
    }
}
