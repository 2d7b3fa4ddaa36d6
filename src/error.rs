use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, running, or reporting a benchmark.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error("{algorithm} produced invalid output on {dataset} (n={size}): {reason}")]
    Verification {
        algorithm: String,
        dataset: String,
        size: usize,
        reason: String,
    },

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
