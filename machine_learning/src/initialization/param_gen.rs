use ndarray::Array2;
use rand::RngCore;

/// A `ParamGen` generates the initial values of one parameter segment, e.g. a weight matrix or
/// a bias row.
pub trait ParamGen {
    /// Generates a segment of the given shape.
    ///
    /// # Arguments
    /// * `rng` - The random number generator to draw from, if the generator needs one.
    /// * `shape` - The `(rows, cols)` of the segment.
    fn generate(&self, rng: &mut dyn RngCore, shape: (usize, usize)) -> Array2<f64>;
}
