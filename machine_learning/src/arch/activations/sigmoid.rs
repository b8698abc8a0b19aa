use ndarray::Array2;

/// The logistic function, applied elementwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// Returns a new `Sigmoid`.
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, z: f64) -> f64 {
        1. / (1. + (-z).exp())
    }

    /// Applies the function to every entry of `z`, consuming it.
    pub fn forward(&self, z: Array2<f64>) -> Array2<f64> {
        z.mapv_into(|z| self.f(z))
    }
}
