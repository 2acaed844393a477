use super::{Examples, LabeledDataset, LabeledExample};
use crate::error::{EvalError, EvalResult};
use ndarray::{Array1, Array2, ArrayView1};
#[cfg(feature = "linfa")]
use crate::prediction::AsScore;

/// Row-major records with one label per row
#[derive(Debug, Clone, PartialEq)]
pub struct NdarrayDataset {
    records: Array2<f64>,
    labels: Array1<f64>,
}

impl NdarrayDataset {
    pub fn new(records: Array2<f64>, labels: Array1<f64>) -> EvalResult<Self> {
        if records.nrows() != labels.len() {
            return Err(EvalError::ShapeMismatch {
                records: records.nrows(),
                labels: labels.len(),
            });
        }
        Ok(NdarrayDataset { records, labels })
    }

    pub fn records(&self) -> &Array2<f64> {
        &self.records
    }

    pub fn labels(&self) -> &Array1<f64> {
        &self.labels
    }

    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.records.ncols()
    }
}

fn row_to_example(row: ArrayView1<'_, f64>, label: f64) -> LabeledExample {
    LabeledExample::new(row.to_vec(), label)
}

impl LabeledDataset for NdarrayDataset {
    fn examples(&self) -> Examples<'_> {
        Box::new(
            self.records
                .rows()
                .into_iter()
                .zip(self.labels.iter())
                .map(|(row, &label)| Ok(row_to_example(row, label))),
        )
    }
}

#[cfg(feature = "linfa")]
impl<T> LabeledDataset for linfa::DatasetBase<Array2<f64>, Array1<T>>
where
    T: AsScore,
{
    fn examples(&self) -> Examples<'_> {
        if self.records.nrows() != self.targets.len() {
            return Box::new(std::iter::once(Err(EvalError::ShapeMismatch {
                records: self.records.nrows(),
                labels: self.targets.len(),
            })));
        }
        Box::new(
            self.records
                .rows()
                .into_iter()
                .zip(self.targets.iter())
                .map(|(row, target)| Ok(row_to_example(row, target.as_score()))),
        )
    }
}
