use std::{collections::VecDeque, num::NonZeroUsize};

/// Weighs every reward by `discount_factor^t`, where `t` counts steps from the start of the
/// episode.
///
/// # Arguments
/// * `rewards` - The rewards of one episode, in step order.
/// * `discount_factor` - The per step discount, in `(0, 1]`.
pub fn discounted_rewards(rewards: &[f64], discount_factor: f64) -> Vec<f64> {
    rewards
        .iter()
        .enumerate()
        .map(|(t, r)| r * discount_factor.powf(t as f64))
        .collect()
}

/// The sum of an episode's discounted rewards.
pub fn discounted_return(rewards: &[f64], discount_factor: f64) -> f64 {
    discounted_rewards(rewards, discount_factor).iter().sum()
}

/// The mean of the most recent episode returns.
#[derive(Debug, Clone)]
pub struct RunningBaseline {
    returns: VecDeque<f64>,
    window: NonZeroUsize,
}

impl RunningBaseline {
    /// The window size used by `Default`.
    pub const WINDOW: NonZeroUsize = NonZeroUsize::new(100).unwrap();

    /// Creates an empty `RunningBaseline`.
    ///
    /// # Arguments
    /// * `window` - How many of the latest returns are averaged.
    pub fn new(window: NonZeroUsize) -> Self {
        Self {
            returns: VecDeque::with_capacity(window.get()),
            window,
        }
    }

    /// Appends a return, forgetting the oldest one if the window is full.
    pub fn push(&mut self, value: f64) {
        if self.returns.len() == self.window.get() {
            self.returns.pop_front();
        }

        self.returns.push_back(value);
    }

    /// The arithmetic mean of the returns in the window, zero when empty.
    pub fn mean(&self) -> f64 {
        if self.returns.is_empty() {
            return 0.;
        }

        self.returns.iter().sum::<f64>() / self.returns.len() as f64
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

impl Default for RunningBaseline {
    fn default() -> Self {
        Self::new(Self::WINDOW)
    }
}

/// The return of an episode and its advantage over the running baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeReturn {
    pub discounted_return: f64,
    pub baseline: f64,
    pub advantage: f64,
}

impl EpisodeReturn {
    /// Computes the episode's discounted return and records it in `baseline`.
    ///
    /// The return is pushed before the mean is taken, so the episode is part of its own
    /// baseline. In particular the very first episode always has a zero advantage.
    ///
    /// # Arguments
    /// * `rewards` - The rewards of the episode.
    /// * `discount_factor` - The per step discount.
    /// * `baseline` - The running baseline, updated in place.
    pub fn compute(rewards: &[f64], discount_factor: f64, baseline: &mut RunningBaseline) -> Self {
        let discounted_return = discounted_return(rewards, discount_factor);
        baseline.push(discounted_return);
        let mean = baseline.mean();

        Self {
            discounted_return,
            baseline: mean,
            advantage: discounted_return - mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discounting() {
        assert_eq!(discounted_rewards(&[1., 1., 1.], 0.5), [1., 0.5, 0.25]);
        assert_eq!(discounted_return(&[1., 1., 1.], 0.5), 1.75);
    }

    #[test]
    fn exponent_counts_from_start() {
        let g = discounted_return(&[0., 0., 4.], 0.5);
        assert_eq!(g, 1.);
    }

    #[test]
    fn empty_episode() {
        assert_eq!(discounted_return(&[], 0.9), 0.);
    }

    #[test]
    fn empty_baseline() {
        let baseline = RunningBaseline::default();

        assert!(baseline.is_empty());
        assert_eq!(baseline.mean(), 0.);
    }

    #[test]
    fn baseline_mean() {
        let mut baseline = RunningBaseline::default();

        for g in [2., 4., 6.] {
            baseline.push(g);
        }

        assert_eq!(baseline.mean(), 4.);
    }

    #[test]
    fn baseline_window() {
        let mut baseline = RunningBaseline::new(NonZeroUsize::new(3).unwrap());

        for g in [100., 1., 2., 3.] {
            baseline.push(g);
        }

        assert_eq!(baseline.len(), 3);
        assert_eq!(baseline.mean(), 2.);
    }

    #[test]
    fn default_window_keeps_last_hundred() {
        let mut baseline = RunningBaseline::default();

        for i in 0..150 {
            baseline.push(i as f64);
        }

        assert_eq!(baseline.len(), 100);
        assert_eq!(baseline.mean(), (50..150).sum::<usize>() as f64 / 100.);
    }

    #[test]
    fn advantage_includes_own_return() {
        let mut baseline = RunningBaseline::default();

        let first = EpisodeReturn::compute(&[1., 1.], 1., &mut baseline);
        assert_eq!(first.discounted_return, 2.);
        assert_eq!(first.baseline, 2.);
        assert_eq!(first.advantage, 0.);

        let second = EpisodeReturn::compute(&[4.], 1., &mut baseline);
        assert_eq!(second.baseline, 3.);
        assert_eq!(second.advantage, 1.);
    }
}
