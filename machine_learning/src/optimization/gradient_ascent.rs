use super::Optimizer;
use crate::{MlErr, Result};

/// Gradient ascent optimization algorithm.
pub struct GradientAscent {
    step_size: f64,
}

impl GradientAscent {
    /// Returns a new `GradientAscent`.
    ///
    /// # Arguments
    /// * `step_size` - The *length* of the steps taken on `update_params`.
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }
}

impl Optimizer for GradientAscent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the direction of the gradient, with a length of `step_size`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]) -> Result<()> {
        if grad.len() != params.len() {
            return Err(MlErr::SizeMismatch {
                what: "gradient",
                got: grad.len(),
                expected: params.len(),
            });
        }

        let step_size = self.step_size;

        for (w, g) in params.iter_mut().zip(grad) {
            *w += step_size * g;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_along_gradient() {
        let mut optimizer = GradientAscent::new(0.5);
        let mut params = [1., 2., 3.];

        optimizer.update_params(&mut params, &[2., 0., -4.]).unwrap();

        assert_eq!(params, [2., 2., 1.]);
    }

    #[test]
    fn short_gradient_leaves_params_untouched() {
        let mut optimizer = GradientAscent::new(1.);
        let mut params = [1., 2., 3.];

        let err = optimizer.update_params(&mut params, &[1.]).unwrap_err();

        assert_eq!(
            err,
            MlErr::SizeMismatch {
                what: "gradient",
                got: 1,
                expected: 3,
            }
        );
        assert_eq!(params, [1., 2., 3.]);
    }
}
