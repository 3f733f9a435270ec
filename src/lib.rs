pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use crate::args::Args;
use crate::config::SnapshotConfig;
use crate::error::{AppError, Result};
use code_snapshot_engine::stats::RunResult;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BIN_NAME: &str = "code_snapshot";

/// Validate the parsed arguments and run the engine.
///
/// # Errors
/// [`AppError::Usage`] when no paths were given; otherwise whatever the
/// engine reports.
pub fn run(args: Args) -> Result<RunResult> {
    if args.paths.is_empty() {
        return Err(AppError::Usage { bin: BIN_NAME });
    }
    let config = SnapshotConfig::try_from(args)?;
    Ok(code_snapshot_engine::run(&config)?)
}
