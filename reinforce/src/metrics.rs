/// What happened during one training episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeReport {
    pub episode: usize,
    pub steps: usize,
    pub discounted_return: f64,
    pub baseline: f64,
    pub advantage: f64,
    /// The euclidean norm of the advantage weighted gradient.
    pub gradient_norm: f64,
}

/// Running totals over a training run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingMetrics {
    pub episodes: u64,
    pub steps: u64,
    pub last_return: Option<f64>,
    pub best_return: Option<f64>,
}

impl TrainingMetrics {
    #[inline]
    pub fn record(&mut self, report: &EpisodeReport) {
        self.episodes += 1;
        self.steps += report.steps as u64;
        self.last_return = Some(report.discounted_return);
        self.best_return = Some(match self.best_return {
            Some(best) => best.max(report.discounted_return),
            None => report.discounted_return,
        });
    }

    /// The average amount of steps per episode.
    pub fn mean_steps(&self) -> f64 {
        if self.episodes == 0 {
            return 0.;
        }

        self.steps as f64 / self.episodes as f64
    }
}
