use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for memory generation
pub type Result<T> = std::result::Result<T, BramError>;

/// Failures that stop a generation run
#[derive(Error, Debug)]
pub enum BramError {
    /// Image has more words than the largest organization holds
    #[error("{word_count} locations is too big, can only support up to {limit} locations")]
    CapacityExceeded { word_count: usize, limit: usize },

    /// Reading the image or writing an output target failed
    #[error("failed to {op} {}: {source}", .path.display())]
    IoFailure {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BramError {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BramError::IoFailure {
            op,
            path: path.into(),
            source,
        }
    }
}
