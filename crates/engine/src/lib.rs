// crates/engine/src/lib.rs
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod assembler;
pub mod config;
pub mod error;
pub mod fence;
pub mod filesystem;
pub mod language;
pub mod output;
pub mod registry;
pub mod stats;

pub use crate::assembler::SnapshotAssembler;
pub use crate::fence::{Fence, select_fence};

use crate::config::SnapshotConfig;
use crate::error::{EngineError, Result};
use crate::stats::RunResult;

/// Build the snapshot and extension-map documents described by `config`.
///
/// Both documents are truncated before any input is read, so a rerun with the
/// same inputs reproduces the same bytes.
///
/// # Errors
///
/// - [`EngineError::NoInputs`] if `config.inputs` is empty (nothing is touched).
/// - [`EngineError::OutputCollision`] if both documents resolve to one path (nothing is touched).
/// - [`EngineError::NoValidInput`] if every input was skipped.
/// - [`EngineError::Skipped`] in strict mode.
/// - [`EngineError::CreateOutput`] / [`EngineError::Write`] on output I/O failures.
pub fn run(config: &SnapshotConfig) -> Result<RunResult> {
    if config.inputs.is_empty() {
        return Err(EngineError::NoInputs);
    }

    let snapshot_path = config.snapshot_path();
    let map_path = config.map_path();
    if snapshot_path == map_path {
        return Err(EngineError::OutputCollision(snapshot_path));
    }

    fs::create_dir_all(&config.out_dir).map_err(|e| EngineError::CreateOutput {
        path: config.out_dir.clone(),
        source: e,
    })?;

    let mut snapshot = create_output(&snapshot_path)?;
    let mut map = create_output(&map_path)?;

    let assembler = SnapshotAssembler::new(&config.languages, config.strict);
    let assembly = assembler
        .assemble(&config.inputs, &mut snapshot)
        .map_err(|e| with_write_path(e, &snapshot_path))?;
    snapshot
        .flush()
        .map_err(|e| with_write_path(e.into(), &snapshot_path))?;

    if assembly.sections_written == 0 {
        return Err(EngineError::NoValidInput {
            skipped: assembly.skipped.len(),
        });
    }

    output::write_extension_map(&mut map, &assembly.extensions, &config.languages)
        .and_then(|()| map.flush())
        .map_err(|e| with_write_path(e.into(), &map_path))?;

    info!(
        "wrote {} section(s) to {}, extension map to {}",
        assembly.sections_written,
        snapshot_path.display(),
        map_path.display()
    );

    Ok(RunResult {
        sections_written: assembly.sections_written,
        extensions: assembly.extensions,
        skipped: assembly.skipped,
        snapshot_path,
        map_path,
    })
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| EngineError::CreateOutput {
            path: path.to_path_buf(),
            source: e,
        })
}

fn with_write_path(err: EngineError, path: &Path) -> EngineError {
    match err {
        EngineError::Io(source) => EngineError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
