use ndarray::{Array2, Axis};

/// Row-wise softmax.
///
/// Each row is shifted by its maximum before exponentiating, so large logits never overflow
/// `exp`. The shift cancels out in the quotient, so the result is the same distribution.
#[derive(Clone, Copy, Debug, Default)]
pub struct Softmax;

impl Softmax {
    /// Returns a new `Softmax`.
    pub fn new() -> Self {
        Self
    }

    /// Turns every row of logits into a probability distribution.
    ///
    /// # Arguments
    /// * `z` - A matrix of logits, one row per sample.
    ///
    /// # Returns
    /// A matrix of the same shape where each row is non-negative and sums to one.
    pub fn forward(&self, mut z: Array2<f64>) -> Array2<f64> {
        for mut row in z.axis_iter_mut(Axis(0)) {
            let max = row.fold(f64::NEG_INFINITY, |max, &x| max.max(x));
            row.mapv_inplace(|x| (x - max).exp());

            let total = row.sum();
            row.mapv_inplace(|x| x / total);
        }

        z
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn uniform() {
        let p = Softmax.forward(array![[3., 3., 3., 3.]]);
        assert!(p.iter().all(|&x| (x - 0.25).abs() < 1e-12));
    }

    #[test]
    fn rows_are_independent() {
        let p = Softmax.forward(array![[0., 1.], [1., 0.]]);

        assert!((p[[0, 1]] - p[[1, 0]]).abs() < 1e-12);
        assert!((p[[0, 0]] - p[[1, 1]]).abs() < 1e-12);
        assert!(p[[0, 1]] > p[[0, 0]]);
    }

    #[test]
    fn large_logits() {
        let p = Softmax.forward(array![[1000., 999., -1000.]]);

        assert!(p.iter().all(|x| x.is_finite()));
        assert!((p.sum() - 1.).abs() < 1e-12);

        let expected = 1. / (1. + (-1f64).exp());
        assert!((p[[0, 0]] - expected).abs() < 1e-12);
        assert_eq!(p[[0, 2]], 0.);
    }
}
