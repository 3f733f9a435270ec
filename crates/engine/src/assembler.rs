use crate::error::{EngineError, Result};
use crate::fence::Fence;
use crate::filesystem::{self, SkipReason};
use crate::language::LanguageMap;
use crate::output;
use crate::stats::Assembly;
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

/// Turns an ordered list of paths into fenced Markdown sections.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotAssembler<'a> {
    languages: &'a LanguageMap,
    strict: bool,
}

impl<'a> SnapshotAssembler<'a> {
    #[must_use]
    pub const fn new(languages: &'a LanguageMap, strict: bool) -> Self {
        Self { languages, strict }
    }

    /// Write one section per usable path to `out`, in input order.
    ///
    /// Paths that are missing, not regular files, or unreadable are skipped with
    /// a warning and listed in [`Assembly::skipped`].
    ///
    /// # Errors
    /// - [`EngineError::Skipped`] for the first skip when strict mode is on.
    /// - [`EngineError::Io`] if writing to `out` fails.
    pub fn assemble<P: AsRef<Path>>(&self, paths: &[P], out: &mut impl Write) -> Result<Assembly> {
        let mut assembly = Assembly::default();

        for path in paths {
            let path = path.as_ref();
            let content = match filesystem::inspect(path).and_then(|()| filesystem::read_content(path)) {
                Ok(content) => content,
                Err(reason) => {
                    self.skip(path, reason, &mut assembly)?;
                    continue;
                }
            };

            let ext = filesystem::extension_of(path);
            let name = filesystem::basename(path);
            let fence = Fence::select(&content, self.languages.tag(&ext));
            debug!(
                "{}: ext={ext:?} fence={} backticks",
                path.display(),
                fence.run_len()
            );

            output::write_section(out, self.languages.emoji(&ext), &name, &fence, &content)?;

            assembly.extensions.insert(&ext);
            assembly.sections_written += 1;
        }

        Ok(assembly)
    }

    fn skip(&self, path: &Path, reason: SkipReason, assembly: &mut Assembly) -> Result<()> {
        if self.strict {
            return Err(EngineError::Skipped {
                path: path.to_path_buf(),
                reason,
            });
        }
        warn!("skipping '{}': {reason}", path.display());
        assembly.skipped.push((path.to_path_buf(), reason));
        Ok(())
    }
}
