use std::error::Error;

use ndarray::Array1;
use rand::RngCore;

/// The outcome of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<I = ()> {
    pub observation: Array1<f64>,
    pub reward: f64,
    pub done: bool,
    /// Environment specific diagnostics, never read by the trainer.
    pub info: I,
}

/// An episodic environment with a continuous observation space and a discrete action space.
///
/// Both calls block until the environment answers. Any error is fatal to training, there's no
/// retry policy.
pub trait Environment {
    type Info;
    type Error: Error + Send + Sync + 'static;

    /// The dimension of every observation.
    fn observation_size(&self) -> usize;

    /// The amount of discrete actions, valid actions are `0..action_count()`.
    fn action_count(&self) -> usize;

    /// Begins a new episode.
    ///
    /// # Arguments
    /// * `rng` - The training run's random stream, for environments with random initial states.
    ///
    /// # Returns
    /// The initial observation.
    fn reset(&mut self, rng: &mut dyn RngCore) -> Result<Array1<f64>, Self::Error>;

    /// Advances the episode by one timestep.
    fn step(&mut self, action: usize) -> Result<Transition<Self::Info>, Self::Error>;
}
