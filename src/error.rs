//! Error types for the dilemma crate

use thiserror::Error;

/// Main error type for the dilemma crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "payoff constants violate T > R > P > S: S={sucker}, P={punishment}, R={reward}, T={temptation}"
    )]
    InvalidPayoffOrdering {
        sucker: f64,
        punishment: f64,
        reward: f64,
        temptation: f64,
    },

    #[error(
        "mutual cooperation must beat alternating exploitation (2R > T + S): R={reward}, T={temptation}, S={sucker}"
    )]
    UnrewardingCooperation {
        sucker: f64,
        reward: f64,
        temptation: f64,
    },

    #[error("{quantity} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { quantity: String, value: f64 },

    #[error("{family} strategy is infeasible: derived {parameter} = {value} lies outside [0, 1]")]
    InfeasibleZdParameters {
        family: String,
        parameter: String,
        value: f64,
    },

    #[error("extortion factor must exceed 1, got {chi}")]
    InvalidExtortionFactor { chi: f64 },

    #[error("round count must be positive")]
    InvalidRoundCount,

    #[error("trial count must be positive")]
    InvalidTrialCount,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
