use std::num::NonZeroUsize;

use log::{trace, warn};
use machine_learning::{arch::Policy, optimization::Objective};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::Rng;

use crate::{ActionSampler, Environment, ReinforceErr, Result};

/// The `(observation, action, reward)` triples of one episode, in step order.
#[derive(Debug, Clone)]
pub struct Trajectory {
    states: Array2<f64>,
    actions: Vec<usize>,
    rewards: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory for observations of `observation_size` values.
    pub fn new(observation_size: usize) -> Self {
        Self {
            states: Array2::zeros((0, observation_size)),
            actions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Appends a step.
    ///
    /// # Returns
    /// An error if the observation doesn't have the trajectory's observation size.
    pub fn push(&mut self, observation: ArrayView1<f64>, action: usize, reward: f64) -> Result<()> {
        let expected = self.states.ncols();
        check_observation(observation, expected)?;

        self.states
            .push_row(observation)
            .map_err(|_| ReinforceErr::ObservationSize {
                got: observation.len(),
                expected,
            })?;

        self.actions.push(action);
        self.rewards.push(reward);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The observed states, one per row.
    pub fn states(&self) -> ArrayView2<'_, f64> {
        self.states.view()
    }

    pub fn actions(&self) -> &[usize] {
        &self.actions
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Builds the log-likelihood objective of this trajectory under `policy`.
    pub fn log_likelihood<'a>(&'a self, policy: &'a Policy) -> LogLikelihood<'a> {
        LogLikelihood::new(policy, self.states(), self.actions())
    }
}

/// The log-likelihood of an episode's executed actions, as a function of the policy parameters.
///
/// Holds borrowed references to the trajectory so it can be evaluated any number of times
/// with candidate parameters.
#[derive(Debug, Clone, Copy)]
pub struct LogLikelihood<'a> {
    policy: &'a Policy,
    states: ArrayView2<'a, f64>,
    actions: &'a [usize],
}

impl<'a> LogLikelihood<'a> {
    pub fn new(policy: &'a Policy, states: ArrayView2<'a, f64>, actions: &'a [usize]) -> Self {
        Self {
            policy,
            states,
            actions,
        }
    }
}

impl Objective for LogLikelihood<'_> {
    fn evaluate(&self, params: &[f64]) -> machine_learning::Result<f64> {
        self.policy.log_likelihood(params, self.states, self.actions)
    }
}

/// Plays full episodes against an environment with a fixed set of policy parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrajectoryCollector {
    sampler: ActionSampler,
    max_steps: Option<NonZeroUsize>,
}

impl TrajectoryCollector {
    /// Creates a new `TrajectoryCollector`.
    ///
    /// # Arguments
    /// * `max_steps` - Truncates episodes after this many steps. With `None` an episode only
    ///   ends when the environment reports it's done, so a stalled environment never returns.
    pub fn new(max_steps: Option<NonZeroUsize>) -> Self {
        Self {
            sampler: ActionSampler::new(),
            max_steps,
        }
    }

    /// Runs one episode from reset to termination.
    ///
    /// # Arguments
    /// * `env` - The environment to play against.
    /// * `policy` - The policy that picks the actions.
    /// * `params` - The policy parameters, read only.
    /// * `rng` - The random stream used for the environment reset and for action sampling.
    ///
    /// # Returns
    /// The completed trajectory, or the first environment or model error.
    pub fn collect<E, R>(
        &self,
        env: &mut E,
        policy: &Policy,
        params: &[f64],
        rng: &mut R,
    ) -> Result<Trajectory>
    where
        E: Environment + ?Sized,
        R: Rng,
    {
        let observation_size = policy.layout().input_size();
        let mut trajectory = Trajectory::new(observation_size);
        let mut observation = env.reset(&mut *rng).map_err(ReinforceErr::environment)?;

        loop {
            check_observation(observation.view(), observation_size)?;

            let probs = policy.action_probabilities(params, observation.view())?;
            let action = self.sampler.sample(probs.view(), rng);
            let transition = env.step(action).map_err(ReinforceErr::environment)?;

            trajectory.push(observation.view(), action, transition.reward)?;
            observation = transition.observation;

            if transition.done {
                break;
            }

            if self
                .max_steps
                .is_some_and(|max_steps| trajectory.len() >= max_steps.get())
            {
                warn!("episode truncated: steps={}", trajectory.len());
                break;
            }
        }

        trace!(steps = trajectory.len(); "collected trajectory");
        Ok(trajectory)
    }
}

fn check_observation(observation: ArrayView1<f64>, expected: usize) -> Result<()> {
    if observation.len() != expected {
        return Err(ReinforceErr::ObservationSize {
            got: observation.len(),
            expected,
        });
    }

    Ok(())
}
