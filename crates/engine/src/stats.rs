use crate::filesystem::SkipReason;
use crate::registry::ExtensionRegistry;
use std::path::PathBuf;

/// Outcome of one pass of the assembler over its input paths.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub sections_written: usize,
    pub extensions: ExtensionRegistry,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Result of a full run, including where the documents were written.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub sections_written: usize,
    pub extensions: ExtensionRegistry,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub snapshot_path: PathBuf,
    pub map_path: PathBuf,
}
