// src/error.rs
use code_snapshot_engine::config::SnapshotConfigBuilderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] code_snapshot_engine::error::EngineError),

    #[error("No input files given. Usage: {bin} [OPTIONS] <FILE>...")]
    Usage { bin: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(#[from] SnapshotConfigBuilderError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
