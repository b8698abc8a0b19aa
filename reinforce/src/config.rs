use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ReinforceErr, Result};

const HIDDEN_SIZE: NonZeroUsize = NonZeroUsize::new(8).unwrap();
const EPISODES: NonZeroUsize = NonZeroUsize::new(3000).unwrap();
const BASELINE_WINDOW: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Hyperparameters of a training run.
///
/// Every field has a default, so a JSON document only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// The amount of hidden units of the policy network.
    pub hidden_size: NonZeroUsize,
    /// The per step reward discount, in `(0, 1]`.
    pub discount_factor: f64,
    /// The length of the gradient ascent step.
    pub step_size: f64,
    /// The amount of episodes to train for.
    pub episodes: NonZeroUsize,
    /// The seed of the run's random stream.
    pub seed: u64,
    /// The perturbation size of the finite difference gradient.
    pub epsilon: f64,
    /// How many of the latest episode returns the baseline averages.
    pub baseline_window: NonZeroUsize,
    /// Optionally truncate episodes after this many steps.
    pub max_steps: Option<NonZeroUsize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            hidden_size: HIDDEN_SIZE,
            discount_factor: 0.98,
            step_size: 0.001,
            episodes: EPISODES,
            seed: 0,
            epsilon: 5e-5,
            baseline_window: BASELINE_WINDOW,
            max_steps: None,
        }
    }
}

impl TrainingConfig {
    /// Parses and validates a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the values serde can't express as types.
    ///
    /// # Errors
    /// `ReinforceErr::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let gamma = self.discount_factor;
        if !(gamma > 0. && gamma <= 1.) {
            return Err(ReinforceErr::InvalidConfig(format!(
                "discount_factor ({gamma}) must be in (0, 1]"
            )));
        }

        for (name, value) in [("step_size", self.step_size), ("epsilon", self.epsilon)] {
            if !(value.is_finite() && value > 0.) {
                return Err(ReinforceErr::InvalidConfig(format!(
                    "{name} ({value}) must be a positive finite number"
                )));
            }
        }

        Ok(())
    }
}
