//! Model Evaluation Metrics Module
//!
//! This module scores a trained model against a labeled dataset:
//! - **accuracy**: classification scoring (error count, accuracy, precision, recall)
//! - **confusion_matrix**: the `[predicted][truth]` count matrix
//! - **regression_metrics**: R², MSE, RMSE and MAE for regression models

pub mod accuracy;
pub mod confusion_matrix;
pub mod regression_metrics;
