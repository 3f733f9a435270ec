use crate::fence::{Fence, MIN_FENCE_LEN, backtick_run};
use crate::language::LanguageMap;
use crate::registry::ExtensionRegistry;
use std::io::Write;

pub const EXTENSION_MAP_TITLE: &str = "# Extension Map";

/// Write one labelled section:
///
/// ```text
/// ## <emoji> **<basename>**
///
/// <run><tag>
/// <content>
/// <run>
///
/// ```
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_section(
    out: &mut impl Write,
    emoji: &str,
    basename: &str,
    fence: &Fence,
    content: &str,
) -> std::io::Result<()> {
    writeln!(out, "## {emoji} **{basename}**\n")?;
    writeln!(out, "{}", fence.opening())?;
    writeln!(out, "{content}")?;
    writeln!(out, "{}\n", fence.closing())?;
    Ok(())
}

/// Write the extension table. The fence column shows the generic three-backtick
/// form for each extension, not the run chosen for any particular file.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_extension_map(
    out: &mut impl Write,
    registry: &ExtensionRegistry,
    languages: &LanguageMap,
) -> std::io::Result<()> {
    writeln!(out, "{EXTENSION_MAP_TITLE}\n")?;
    writeln!(out, "| Extension | Fence Tag | Emoji |")?;
    writeln!(out, "|-----------|-----------|-------|")?;
    let run = backtick_run(MIN_FENCE_LEN);
    for ext in registry.iter() {
        writeln!(
            out,
            "| .{} | {run}{} | {} |",
            escape_cell(ext),
            escape_cell(languages.tag(ext)),
            escape_cell(languages.emoji(ext))
        )?;
    }
    Ok(())
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
