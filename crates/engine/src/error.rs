use crate::filesystem::SkipReason;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No input files given")]
    NoInputs,

    #[error("None of the {skipped} input path(s) could be processed")]
    NoValidInput { skipped: usize },

    #[error("Skipped '{path}': {reason}")]
    Skipped { path: PathBuf, reason: SkipReason },

    #[error("Snapshot and extension map would both be written to '{0}'")]
    OutputCollision(PathBuf),

    #[error("Failed to create output '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
