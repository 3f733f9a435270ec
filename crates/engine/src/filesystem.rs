use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why an input path produced no section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("no such file")]
    NotFound,

    #[error("not a regular file")]
    NotAFile,

    #[error("unreadable: {0}")]
    Unreadable(String),
}

/// Check that `path` resolves (following symlinks) to a regular file.
///
/// # Errors
/// Returns the [`SkipReason`] describing why the path cannot be used.
pub fn inspect(path: &Path) -> Result<(), SkipReason> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(SkipReason::NotAFile),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SkipReason::NotFound),
        Err(e) => Err(SkipReason::Unreadable(e.to_string())),
    }
}

/// Read the whole file as text. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns [`SkipReason::Unreadable`] if the read fails.
pub fn read_content(path: &Path) -> Result<String, SkipReason> {
    let bytes = fs::read(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Final path component as text.
#[must_use]
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
        .into_owned()
}

/// Text after the last '.' of the basename.
///
/// A name without any '.' yields the whole basename, so `Makefile` maps to
/// the key `Makefile`.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let name = basename(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_owned(),
        None => name,
    }
}
