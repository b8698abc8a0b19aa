use ndarray::ArrayView1;
use rand::Rng;

/// Draws discrete actions from a probability distribution by inverting its CDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionSampler;

impl ActionSampler {
    /// Returns a new `ActionSampler`.
    pub fn new() -> Self {
        Self
    }

    /// Draws an action using one uniform sample from `rng`.
    pub fn sample<R: Rng>(&self, probs: ArrayView1<f64>, rng: &mut R) -> usize {
        let r: f64 = rng.random();
        self.select(probs, r)
    }

    /// Selects the smallest action whose cumulative probability reaches `r`.
    ///
    /// If rounding keeps the cumulative sum below `r` the last action is returned.
    ///
    /// # Arguments
    /// * `probs` - The probability of each action.
    /// * `r` - A uniform sample in `[0, 1)`.
    pub fn select(&self, probs: ArrayView1<f64>, r: f64) -> usize {
        let mut total = 0.;

        for (i, p) in probs.iter().enumerate() {
            total += p;
            if r <= total {
                return i;
            }
        }

        probs.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn inverse_cdf() {
        let probs = array![0.2, 0.5, 0.3];
        let sampler = ActionSampler::new();

        assert_eq!(sampler.select(probs.view(), 0.0), 0);
        assert_eq!(sampler.select(probs.view(), 0.1), 0);
        assert_eq!(sampler.select(probs.view(), 0.2), 0);
        assert_eq!(sampler.select(probs.view(), 0.21), 1);
        assert_eq!(sampler.select(probs.view(), 0.69), 1);
        assert_eq!(sampler.select(probs.view(), 0.71), 2);
        assert_eq!(sampler.select(probs.view(), 0.999), 2);
    }

    #[test]
    fn skips_impossible_actions() {
        let probs = array![0.0, 0.0, 1.0];
        assert_eq!(ActionSampler.select(probs.view(), 0.3), 2);
    }

    #[test]
    fn rounding_falls_back_to_last() {
        let probs = array![0.3, 0.3, 0.3999999];
        assert_eq!(ActionSampler.select(probs.view(), 0.99999999), 2);

        let probs = array![0.5, 0.49];
        assert_eq!(ActionSampler.select(probs.view(), 0.995), 1);
    }

    #[test]
    fn empty_distribution() {
        let probs = Array1::<f64>::zeros(0);
        assert_eq!(ActionSampler.select(probs.view(), 0.5), 0);
    }

    #[test]
    fn empirical_frequencies() {
        const DRAWS: usize = 10_000;
        let probs = array![0.1, 0.2, 0.3, 0.4];
        let mut rng = StdRng::seed_from_u64(0);
        let mut counts = [0usize; 4];

        for _ in 0..DRAWS {
            counts[ActionSampler.sample(probs.view(), &mut rng)] += 1;
        }

        let chi2: f64 = counts
            .iter()
            .zip(&probs)
            .map(|(&observed, &p)| {
                let expected = p * DRAWS as f64;
                (observed as f64 - expected).powi(2) / expected
            })
            .sum();

        // 99.9th percentile of the chi-squared distribution with 3 degrees of freedom.
        assert!(chi2 < 16.27, "chi2 = {chi2}, counts = {counts:?}");
    }

    #[test]
    fn seeded_stream_is_reproducible() {
        let probs = array![0.25, 0.25, 0.5];
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..64)
                .map(|_| ActionSampler.sample(probs.view(), &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(3), draw(3));
    }
}
