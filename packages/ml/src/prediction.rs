//! The trained-model capability consumed by the evaluators

#[cfg(feature = "linfa")]
use linfa::traits::PredictInplace;
#[cfg(feature = "linfa")]
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// A trained model: feature vector in, predicted value out
///
/// Regression models return a continuous value, classifiers a class index
/// encoded as `f64`. Implementations must not depend on call order.
pub trait Model {
    fn predict(&self, features: &[f64]) -> f64;
}

impl<F> Model for F
where
    F: Fn(&[f64]) -> f64,
{
    fn predict(&self, features: &[f64]) -> f64 {
        self(features)
    }
}

/// Prediction and target element types that can be scored as `f64`
#[cfg(feature = "linfa")]
pub trait AsScore {
    fn as_score(&self) -> f64;
}

#[cfg(feature = "linfa")]
impl AsScore for f64 {
    fn as_score(&self) -> f64 {
        *self
    }
}

#[cfg(feature = "linfa")]
impl AsScore for f32 {
    fn as_score(&self) -> f64 {
        f64::from(*self)
    }
}

#[cfg(feature = "linfa")]
impl AsScore for usize {
    fn as_score(&self) -> f64 {
        *self as f64
    }
}

#[cfg(feature = "linfa")]
impl AsScore for bool {
    fn as_score(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

/// Adapts a fitted linfa regressor (continuous `f64` targets) to [`Model`]
///
/// Each call predicts a single-row batch.
#[cfg(feature = "linfa")]
#[derive(Debug, Clone)]
pub struct LinfaRegressor<M> {
    inner: M,
}

/// Adapts a fitted linfa classifier or clusterer (`usize` targets) to [`Model`]
///
/// k-means cluster ids and classifier labels come back as class indices.
#[cfg(feature = "linfa")]
#[derive(Debug, Clone)]
pub struct LinfaClassifier<M> {
    inner: M,
}

#[cfg(feature = "linfa")]
fn predict_single_row<M, T>(model: &M, features: &[f64]) -> f64
where
    M: PredictInplace<Array2<f64>, Array1<T>>,
    T: AsScore,
{
    let row = ArrayView1::from(features).to_owned().insert_axis(Axis(0));
    let mut targets = model.default_target(&row);
    model.predict_inplace(&row, &mut targets);
    // NaN falls outside every class range and poisons any regression sum.
    targets.first().map(AsScore::as_score).unwrap_or(f64::NAN)
}

#[cfg(feature = "linfa")]
impl<M> LinfaRegressor<M> {
    pub fn new(inner: M) -> Self {
        LinfaRegressor { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[cfg(feature = "linfa")]
impl<M> Model for LinfaRegressor<M>
where
    M: PredictInplace<Array2<f64>, Array1<f64>>,
{
    fn predict(&self, features: &[f64]) -> f64 {
        predict_single_row(&self.inner, features)
    }
}

#[cfg(feature = "linfa")]
impl<M> LinfaClassifier<M> {
    pub fn new(inner: M) -> Self {
        LinfaClassifier { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

#[cfg(feature = "linfa")]
impl<M> Model for LinfaClassifier<M>
where
    M: PredictInplace<Array2<f64>, Array1<usize>>,
{
    fn predict(&self, features: &[f64]) -> f64 {
        predict_single_row(&self.inner, features)
    }
}
