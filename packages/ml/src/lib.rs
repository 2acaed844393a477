//! Model scoring for scorecard
//!
//! This crate scores an already-trained model against a labeled dataset:
//! R² for regression, and error count, accuracy, precision/recall and a
//! confusion matrix for classification. Training and storage stay outside;
//! the evaluators only see the [`Model`] and [`LabeledDataset`] capabilities.

#[path = "ml.rs"]
pub mod ml;


pub use ml::*;
