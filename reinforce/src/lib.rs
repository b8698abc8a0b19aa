pub mod config;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod returns;
pub mod sampler;
pub mod trainer;
pub mod trajectory;

pub use config::TrainingConfig;
pub use environment::{Environment, Transition};
pub use error::{ReinforceErr, Result};
pub use metrics::{EpisodeReport, TrainingMetrics};
pub use returns::{EpisodeReturn, RunningBaseline};
pub use sampler::ActionSampler;
pub use trainer::Trainer;
pub use trajectory::{LogLikelihood, Trajectory, TrajectoryCollector};
