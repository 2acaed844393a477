//! Confusion matrix for classification scoring
//!
//! Rows are predicted classes, columns are true classes. The matrix is sized
//! once from the class count and never grows.

use crate::error::EvalError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Square count matrix indexed by `[predicted][truth]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawConfusionMatrix")]
pub struct ConfusionMatrix {
    num_classes: usize,
    cells: Vec<Vec<usize>>,
}

/// Wire form of [`ConfusionMatrix`], checked before it becomes one
#[derive(Deserialize, JsonSchema)]
struct RawConfusionMatrix {
    num_classes: usize,
    cells: Vec<Vec<usize>>,
}

impl TryFrom<RawConfusionMatrix> for ConfusionMatrix {
    type Error = EvalError;

    fn try_from(raw: RawConfusionMatrix) -> Result<Self, Self::Error> {
        let square = raw.cells.len() == raw.num_classes
            && raw.cells.iter().all(|row| row.len() == raw.num_classes);
        if !square {
            return Err(EvalError::MalformedConfusionMatrix {
                num_classes: raw.num_classes,
                rows: raw.cells.len(),
                row_lengths: raw.cells.iter().map(Vec::len).collect(),
            });
        }
        Ok(ConfusionMatrix {
            num_classes: raw.num_classes,
            cells: raw.cells,
        })
    }
}

impl ConfusionMatrix {
    pub fn new(num_classes: usize) -> Self {
        ConfusionMatrix {
            num_classes,
            cells: vec![vec![0; num_classes]; num_classes],
        }
    }

    /// Build a matrix from existing rows; `None` unless the rows form a square
    pub fn from_rows(cells: Vec<Vec<usize>>) -> Option<Self> {
        let num_classes = cells.len();
        ConfusionMatrix::try_from(RawConfusionMatrix { num_classes, cells }).ok()
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Count one example; returns `false` and leaves the matrix untouched when
    /// either index is out of range
    pub fn record(&mut self, predicted: usize, truth: usize) -> bool {
        match self
            .cells
            .get_mut(predicted)
            .and_then(|row| row.get_mut(truth))
        {
            Some(cell) => {
                *cell += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, predicted: usize, truth: usize) -> Option<usize> {
        self.cells.get(predicted)?.get(truth).copied()
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Sum of every cell
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Sum of the diagonal, i.e. correctly classified examples
    pub fn trace(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.get(i))
            .sum()
    }

    /// Precision of class 0 in a two-class matrix
    ///
    /// `m[0][0] / (m[0][0] + m[0][1])`; `None` for other class counts or when
    /// nothing was predicted as class 0.
    pub fn binary_precision(&self) -> Option<f64> {
        if self.num_classes != 2 {
            return None;
        }
        let true_positive = self.get(0, 0)?;
        ratio(true_positive, true_positive + self.get(0, 1)?)
    }

    /// Recall of class 0 in a two-class matrix
    ///
    /// `m[0][0] / (m[0][0] + m[1][0])`; `None` for other class counts or when
    /// no example truly belongs to class 0.
    pub fn binary_recall(&self) -> Option<f64> {
        if self.num_classes != 2 {
            return None;
        }
        let true_positive = self.get(0, 0)?;
        ratio(true_positive, true_positive + self.get(1, 0)?)
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
