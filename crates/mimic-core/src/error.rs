//! Error types for Mimic

use thiserror::Error;

/// Core Mimic errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MimicError {
    // Tracker boundary errors
    #[error("Malformed tracker frame: {len} values is not a whole number of landmarks")]
    MalformedFrame { len: usize },

    #[error("Unexpected landmark count: expected {expected}, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("Non-finite value in landmark {index}")]
    NonFiniteLandmark { index: usize },

    // Sequence errors
    #[error("Skeleton mismatch: sequence holds {expected} landmarks, snapshot has {actual}")]
    SkeletonMismatch { expected: usize, actual: usize },

    // Game errors
    #[error("Cannot {action} while {phase}")]
    InvalidPhase {
        phase: &'static str,
        action: &'static str,
    },

    #[error("Game over after {rounds} rounds")]
    GameOver { rounds: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Mimic operations
pub type MimicResult<T> = Result<T, MimicError>;
