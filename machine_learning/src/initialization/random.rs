use ndarray::Array2;
use rand::RngCore;
use rand_distr::{Distribution, Normal};

use super::ParamGen;
use crate::Result;

/// Draws every value of a segment from a probability distribution.
pub struct RandParamGen<D: Distribution<f64>> {
    distribution: D,
}

impl<D: Distribution<f64>> RandParamGen<D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(distribution: D) -> Self {
        Self { distribution }
    }
}

impl RandParamGen<Normal<f64>> {
    /// Creates a new `RandParamGen` parameter generator with a normal distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is not finite (Nan or infinite).
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        Ok(Self::new(Normal::new(mean, std_dev)?))
    }

    /// Creates a new `RandParamGen` parameter generator using LeCun normal initialization,
    /// that is, a standard deviation of `1/sqrt(fan_in)`.
    ///
    /// # Arguments
    /// * `fan_in` - The number of input units in the weight tensor.
    pub fn lecun(fan_in: usize) -> Result<Self> {
        let std_dev = (1. / fan_in as f64).sqrt();
        Self::normal(0., std_dev)
    }
}

impl<D: Distribution<f64>> ParamGen for RandParamGen<D> {
    fn generate(&self, rng: &mut dyn RngCore, shape: (usize, usize)) -> Array2<f64> {
        Array2::from_shape_simple_fn(shape, || self.distribution.sample(&mut *rng))
    }
}
