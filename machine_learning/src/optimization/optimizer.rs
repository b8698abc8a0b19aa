use crate::Result;

pub trait Optimizer {
    /// Takes one optimization step over `params`.
    ///
    /// # Returns
    /// An error if `grad` and `params` differ in length.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]) -> Result<()>;
}
