use log::{debug, trace};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::RngCore;

use super::{
    PolicyLayout,
    activations::{Sigmoid, Softmax},
};
use crate::{
    MlErr, Result,
    initialization::{ConstParamGen, ParamGen, RandParamGen},
};

/// A stochastic policy: a two layer network with a sigmoid hidden layer and a softmax output.
///
/// The policy doesn't own its parameters, every pass receives them as a flat slice laid out
/// by its `PolicyLayout`.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    layout: PolicyLayout,
    sigmoid: Sigmoid,
    softmax: Softmax,
}

impl Policy {
    /// Creates a new `Policy`.
    ///
    /// # Arguments
    /// * `layout` - The parameter layout of the network.
    ///
    /// # Returns
    /// A new `Policy` instance.
    pub fn new(layout: PolicyLayout) -> Self {
        Self {
            layout,
            sigmoid: Sigmoid::new(),
            softmax: Softmax::new(),
        }
    }

    pub fn layout(&self) -> PolicyLayout {
        self.layout
    }

    /// Returns the amount of parameters of the policy.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Makes a forward pass through the network.
    ///
    /// # Arguments
    /// * `params` - The flat parameters.
    /// * `x` - A batch of observations, one per row.
    ///
    /// # Returns
    /// The action distribution for every observation, one per row, or an error if the
    /// parameters or the observations don't match the layout.
    pub fn forward(&self, params: &[f64], x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let p = self.layout.decode(params)?;

        if x.ncols() != self.layout.input_size() {
            return Err(MlErr::SizeMismatch {
                what: "observation",
                got: x.ncols(),
                expected: self.layout.input_size(),
            });
        }

        let z1 = x.dot(&p.w1) + p.b1;
        let a1 = self.sigmoid.forward(z1);
        let z2 = a1.dot(&p.w2) + p.b2;

        Ok(self.softmax.forward(z2))
    }

    /// Computes the action distribution for a single observation.
    pub fn action_probabilities(
        &self,
        params: &[f64],
        observation: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        let x = observation.insert_axis(Axis(0));
        let probs = self.forward(params, x)?;

        Ok(probs.index_axis_move(Axis(0), 0))
    }

    /// Sums the log probabilities the policy assigns to a sequence of executed actions.
    ///
    /// # Arguments
    /// * `params` - The flat parameters to evaluate the policy with.
    /// * `states` - The observed states, one per row.
    /// * `actions` - The action executed at each state.
    ///
    /// # Returns
    /// `sum_t log(pi(actions[t] | states[t]))`. An action whose probability underflowed to zero
    /// makes it `-inf`, and any finite-difference gradient taken over it NaN.
    pub fn log_likelihood(
        &self,
        params: &[f64],
        states: ArrayView2<f64>,
        actions: &[usize],
    ) -> Result<f64> {
        if states.nrows() != actions.len() {
            return Err(MlErr::SizeMismatch {
                what: "executed actions",
                got: actions.len(),
                expected: states.nrows(),
            });
        }

        let action_count = self.layout.output_size();
        let probs = self.forward(params, states)?;

        let ll = probs
            .outer_iter()
            .zip(actions)
            .try_fold(0., |acc, (row, &action)| -> Result<f64> {
                let p = row.get(action).ok_or(MlErr::InvalidAction {
                    action,
                    action_count,
                })?;

                Ok(acc + p.ln())
            })?;

        if !ll.is_finite() {
            debug!(log_likelihood = ll, steps = actions.len(); "log-likelihood is not finite");
        }

        Ok(ll)
    }

    /// Generates a fresh set of parameters.
    ///
    /// Both weight matrices are drawn from a normal distribution with a standard deviation of
    /// `1/sqrt(fan_in)` and both biases start at zero.
    ///
    /// # Arguments
    /// * `rng` - The random number generator to draw the weights from.
    ///
    /// # Returns
    /// The flat initial parameters.
    pub fn init_params(&self, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let [w1, b1, w2, b2] = self.layout.shapes();
        let bias = ConstParamGen(0.);

        let w1 = RandParamGen::lecun(self.layout.input_size())?.generate(rng, w1);
        let b1 = bias.generate(rng, b1);
        let w2 = RandParamGen::lecun(self.layout.hidden_size())?.generate(rng, w2);
        let b2 = bias.generate(rng, b2);

        let params = self.layout.encode(w1.view(), b1.view(), w2.view(), b2.view())?;

        trace!(size = params.len(); "initialized policy parameters");
        Ok(params)
    }
}
