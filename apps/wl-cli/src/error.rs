//! Error types for the command-line driver.

use std::path::PathBuf;
use wl_network::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read script file: {path}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    ScriptParse(#[from] serde_yaml::Error),

    #[error("Step {index} ({step}) failed: {source}")]
    StepFailed {
        index: usize,
        step: String,
        source: NetworkError,
    },

    #[error("Invariant check failed after step {index}: {source}")]
    InvariantViolated {
        index: usize,
        source: NetworkError,
    },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
