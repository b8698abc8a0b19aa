use ndarray::Array2;
use rand::RngCore;

use super::ParamGen;

/// Fills a segment with a single value, used for the biases.
#[derive(Debug, Clone, Copy)]
pub struct ConstParamGen(pub f64);

impl ParamGen for ConstParamGen {
    fn generate(&self, _rng: &mut dyn RngCore, shape: (usize, usize)) -> Array2<f64> {
        Array2::from_elem(shape, self.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn fills_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let segment = ConstParamGen(1.5).generate(&mut rng, (2, 3));

        assert_eq!(segment, Array2::from_elem((2, 3), 1.5));
    }

    #[test]
    fn empty_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let segment = ConstParamGen(0.).generate(&mut rng, (0, 4));

        assert!(segment.is_empty());
        assert_eq!(segment.dim(), (0, 4));
    }
}
