use super::{Examples, LabeledDataset, LabeledExample};
use crate::error::{EvalError, EvalResult};

/// Examples held in memory, all with the same number of features
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDataset {
    examples: Vec<LabeledExample>,
}

impl InMemoryDataset {
    pub fn new(examples: Vec<LabeledExample>) -> EvalResult<Self> {
        if let Some(first) = examples.first() {
            let expected = first.features().len();
            if let Some((index, example)) = examples
                .iter()
                .enumerate()
                .find(|(_, e)| e.features().len() != expected)
            {
                return Err(EvalError::FeatureLengthMismatch {
                    index,
                    expected,
                    actual: example.features().len(),
                });
            }
        }
        Ok(InMemoryDataset { examples })
    }

    /// Build a dataset from `(features, label)` pairs
    pub fn from_pairs<I, F>(pairs: I) -> EvalResult<Self>
    where
        I: IntoIterator<Item = (F, f64)>,
        F: Into<Vec<f64>>,
    {
        let examples = pairs
            .into_iter()
            .map(|(features, label)| {
                let features: Vec<f64> = features.into();
                LabeledExample::new(features, label)
            })
            .collect();
        Self::new(examples)
    }

    /// Materialize a single-use source so it can be iterated more than once
    ///
    /// Stops at the first error and returns it.
    pub fn buffer<I>(source: I) -> EvalResult<Self>
    where
        I: IntoIterator<Item = EvalResult<LabeledExample>>,
    {
        let examples = source.into_iter().collect::<EvalResult<Vec<_>>>()?;
        tracing::debug!("Buffered {} examples", examples.len());
        Self::new(examples)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledExample> {
        self.examples.iter()
    }
}

impl LabeledDataset for InMemoryDataset {
    fn examples(&self) -> Examples<'_> {
        Box::new(self.examples.iter().cloned().map(Ok))
    }
}

impl TryFrom<Vec<LabeledExample>> for InMemoryDataset {
    type Error = EvalError;

    fn try_from(examples: Vec<LabeledExample>) -> EvalResult<Self> {
        Self::new(examples)
    }
}
