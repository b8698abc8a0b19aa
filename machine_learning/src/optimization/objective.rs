use crate::Result;

/// A scalar function of a flat parameter vector.
pub trait Objective {
    fn evaluate(&self, params: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> Result<f64>,
{
    fn evaluate(&self, params: &[f64]) -> Result<f64> {
        self(params)
    }
}
