use log::trace;
use ndarray::Array1;

use super::Objective;
use crate::Result;

/// Estimates gradients numerically with central differences.
///
/// Every coordinate `i` of the parameters is perturbed on its own by `±epsilon` and the partial
/// derivative is estimated as `(f(x + e_i) - f(x - e_i)) / (2 * epsilon)`.
///
/// This takes `2 * D` evaluations of the objective for `D` parameters. When the objective is a
/// forward pass over a whole trajectory this dominates the cost of training, and it's why the
/// method is only viable for small networks.
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference {
    epsilon: f64,
}

impl FiniteDifference {
    /// The perturbation size used by `Default`.
    pub const EPSILON: f64 = 5e-5;

    /// Creates a new `FiniteDifference` estimator.
    ///
    /// # Arguments
    /// * `epsilon` - The size of the perturbation applied to each coordinate.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Estimates the gradient of `objective` at `params`.
    ///
    /// # Arguments
    /// * `objective` - The function to differentiate.
    /// * `params` - The point to differentiate at, left untouched.
    ///
    /// # Returns
    /// The gradient, the same length as `params`, or the first error the objective returned.
    pub fn gradient<F>(&self, objective: &F, params: &[f64]) -> Result<Array1<f64>>
    where
        F: Objective + ?Sized,
    {
        let e = self.epsilon;
        let mut grad = Array1::zeros(params.len());
        let mut perturbed = params.to_vec();

        for (i, g) in grad.iter_mut().enumerate() {
            let x = params[i];

            perturbed[i] = x - e;
            let loss1 = objective.evaluate(&perturbed)?;

            perturbed[i] = x + e;
            let loss2 = objective.evaluate(&perturbed)?;

            perturbed[i] = x;
            *g = (loss2 - loss1) / (2. * e);
        }

        trace!(evaluations = 2 * params.len(); "estimated gradient");
        Ok(grad)
    }
}

impl Default for FiniteDifference {
    fn default() -> Self {
        Self::new(Self::EPSILON)
    }
}
