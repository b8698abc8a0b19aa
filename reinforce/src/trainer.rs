use std::num::NonZeroUsize;

use log::{debug, info};
use machine_learning::{
    MlErr,
    arch::{Policy, PolicyLayout},
    optimization::{FiniteDifference, GradientAscent, Optimizer},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Environment, EpisodeReport, EpisodeReturn, ReinforceErr, Result, RunningBaseline,
    TrainingConfig, TrainingMetrics, TrajectoryCollector,
};

/// Trains a stochastic policy on an environment with REINFORCE, estimating the gradient of the
/// log-likelihood of each episode by finite differences.
///
/// The trainer is the sole owner of the policy parameters, they only change between episodes.
pub struct Trainer<E, R = StdRng>
where
    E: Environment,
    R: Rng,
{
    env: E,
    policy: Policy,
    params: Vec<f64>,

    collector: TrajectoryCollector,
    estimator: FiniteDifference,
    optimizer: GradientAscent,
    baseline: RunningBaseline,

    discount_factor: f64,
    episodes: NonZeroUsize,
    episode: usize,
    metrics: TrainingMetrics,
    rng: R,
}

impl<E> Trainer<E, StdRng>
where
    E: Environment,
{
    /// Creates a new `Trainer` whose random stream is seeded with `config.seed`.
    ///
    /// # Arguments
    /// * `env` - The environment to train on.
    /// * `config` - The hyperparameters of the run.
    ///
    /// # Returns
    /// A new `Trainer` with freshly initialized parameters, or an error if the configuration
    /// or the environment's dimensions are invalid.
    pub fn new(env: E, config: &TrainingConfig) -> Result<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(env, config, rng)
    }
}

impl<E, R> Trainer<E, R>
where
    E: Environment,
    R: Rng,
{
    /// Creates a new `Trainer` drawing the initial parameters from `rng`.
    pub fn with_rng(env: E, config: &TrainingConfig, mut rng: R) -> Result<Self> {
        let policy = build_policy(&env, config)?;
        let params = policy.init_params(&mut rng)?;

        Self::build(env, config, policy, params, rng)
    }

    /// Creates a new `Trainer` starting from the given parameters.
    ///
    /// # Returns
    /// An error if `params` doesn't match the policy layout.
    pub fn with_params(env: E, config: &TrainingConfig, rng: R, params: Vec<f64>) -> Result<Self> {
        let policy = build_policy(&env, config)?;

        if params.len() != policy.size() {
            return Err(MlErr::SizeMismatch {
                what: "policy parameters",
                got: params.len(),
                expected: policy.size(),
            }
            .into());
        }

        Self::build(env, config, policy, params, rng)
    }

    fn build(
        env: E,
        config: &TrainingConfig,
        policy: Policy,
        params: Vec<f64>,
        rng: R,
    ) -> Result<Self> {
        Ok(Self {
            env,
            policy,
            params,
            collector: TrajectoryCollector::new(config.max_steps),
            estimator: FiniteDifference::new(config.epsilon),
            optimizer: GradientAscent::new(config.step_size),
            baseline: RunningBaseline::new(config.baseline_window),
            discount_factor: config.discount_factor,
            episodes: config.episodes,
            episode: 0,
            metrics: TrainingMetrics::default(),
            rng,
        })
    }

    /// Plays one episode and updates the parameters with it.
    ///
    /// The update is `params += step_size * advantage * grad log P(trajectory | params)`.
    ///
    /// # Returns
    /// The episode's report, or the first environment or model error.
    pub fn run_episode(&mut self) -> Result<EpisodeReport> {
        let trajectory =
            self.collector
                .collect(&mut self.env, &self.policy, &self.params, &mut self.rng)?;

        let EpisodeReturn {
            discounted_return,
            baseline,
            advantage,
        } = EpisodeReturn::compute(
            trajectory.rewards(),
            self.discount_factor,
            &mut self.baseline,
        );

        let objective = trajectory.log_likelihood(&self.policy);
        let grad = self.estimator.gradient(&objective, &self.params)?;
        let step: Vec<f64> = grad.iter().map(|g| g * advantage).collect();
        let gradient_norm = step.iter().map(|g| g * g).sum::<f64>().sqrt();

        self.optimizer.update_params(&mut self.params, &step)?;

        let report = EpisodeReport {
            episode: self.episode,
            steps: trajectory.len(),
            discounted_return,
            baseline,
            advantage,
            gradient_norm,
        };

        debug!(
            episode = report.episode,
            advantage = advantage,
            gradient_norm = gradient_norm;
            "updated policy parameters"
        );
        info!(
            "finished episode {}: steps={} return={:.4} baseline={:.4}",
            report.episode, report.steps, discounted_return, baseline
        );

        self.metrics.record(&report);
        self.episode += 1;
        Ok(report)
    }

    /// Runs the configured amount of episodes.
    ///
    /// # Returns
    /// The report of every episode, in order.
    pub fn train(&mut self) -> Result<Vec<EpisodeReport>> {
        let episodes = self.episodes.get();
        let mut reports = Vec::with_capacity(episodes);

        for _ in 0..episodes {
            reports.push(self.run_episode()?);
        }

        info!(
            "training finished: episodes={} mean_steps={:.2} best_return={:?}",
            self.metrics.episodes,
            self.metrics.mean_steps(),
            self.metrics.best_return
        );

        Ok(reports)
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// The current policy parameters.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn into_params(self) -> Vec<f64> {
        self.params
    }

    pub fn metrics(&self) -> &TrainingMetrics {
        &self.metrics
    }

    pub fn env(&self) -> &E {
        &self.env
    }
}

fn build_policy<E>(env: &E, config: &TrainingConfig) -> Result<Policy>
where
    E: Environment,
{
    config.validate()?;

    let input_size = env.observation_size();
    let output_size = env.action_count();

    if input_size == 0 {
        return Err(ReinforceErr::InvalidConfig(
            "the environment's observations must not be empty".into(),
        ));
    }

    if output_size == 0 {
        return Err(ReinforceErr::InvalidConfig(
            "the environment must have at least one action".into(),
        ));
    }

    let layout = PolicyLayout::new(input_size, config.hidden_size.get(), output_size);
    Ok(Policy::new(layout))
}
