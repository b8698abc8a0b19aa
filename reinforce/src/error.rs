use std::{error::Error, fmt, io};

use machine_learning::MlErr;

/// The reinforce module's result type.
pub type Result<T> = std::result::Result<T, ReinforceErr>;

/// Training runtime failures.
#[derive(Debug)]
pub enum ReinforceErr {
    Ml(MlErr),
    Environment(Box<dyn Error + Send + Sync>),
    InvalidConfig(String),
    ObservationSize { got: usize, expected: usize },
    Io(io::Error),
    Json(serde_json::Error),
}

impl ReinforceErr {
    /// Wraps an error raised by the environment.
    pub fn environment<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Environment(Box::new(err))
    }
}

impl fmt::Display for ReinforceErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReinforceErr::Ml(e) => write!(f, "model error: {e}"),
            ReinforceErr::Environment(e) => write!(f, "environment error: {e}"),
            ReinforceErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            ReinforceErr::ObservationSize { got, expected } => write!(
                f,
                "observation size mismatch: got {got}, expected {expected}"
            ),
            ReinforceErr::Io(e) => write!(f, "io error: {e}"),
            ReinforceErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for ReinforceErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReinforceErr::Ml(e) => Some(e),
            ReinforceErr::Environment(e) => Some(&**e),
            ReinforceErr::Io(e) => Some(e),
            ReinforceErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for ReinforceErr {
    fn from(value: MlErr) -> Self {
        Self::Ml(value)
    }
}

impl From<io::Error> for ReinforceErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReinforceErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
