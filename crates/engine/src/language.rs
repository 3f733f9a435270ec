//! Extension → fence tag / emoji tables.
//!
//! Both lookups are total: unmapped extensions fall back to the extension
//! itself (tag) or [`DEFAULT_EMOJI`].

use hashbrown::HashMap;

/// Marker used for extensions without an emoji entry.
pub const DEFAULT_EMOJI: &str = "📄";

/// Fence language tag for `ext`, or `ext` unchanged when the table has no entry.
#[must_use]
pub fn language_tag(ext: &str) -> &str {
    builtin_tag(&ext.to_ascii_lowercase()).unwrap_or(ext)
}

/// Header emoji for `ext`, or [`DEFAULT_EMOJI`].
#[must_use]
pub fn emoji(ext: &str) -> &'static str {
    builtin_emoji(&ext.to_ascii_lowercase()).unwrap_or(DEFAULT_EMOJI)
}

fn builtin_tag(ext: &str) -> Option<&'static str> {
    let tag = match ext {
        // C系
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "rs" => "rust",
        "go" => "go",
        "zig" => "zig",

        // Web
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "jsx",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "vue" => "vue",

        // スクリプト
        "py" | "pyw" | "pyi" => "python",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "php" => "php",
        "lua" => "lua",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "ps1" => "powershell",

        // Data / config
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "sql" => "sql",
        "txt" => "text",
        _ => return None,
    };
    Some(tag)
}

fn builtin_emoji(ext: &str) -> Option<&'static str> {
    let emoji = match ext {
        "py" | "pyw" | "pyi" => "🐍",
        "go" => "🚀",
        "rs" => "🦀",
        "js" | "mjs" | "cjs" | "jsx" => "🟨",
        "ts" | "mts" | "cts" | "tsx" => "🔷",
        "java" => "☕",
        "rb" => "💎",
        "php" => "🐘",
        "sh" | "bash" | "zsh" => "🐚",
        "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "⚙️",
        "html" | "htm" => "🌐",
        "css" | "scss" => "🎨",
        "json" | "yml" | "yaml" | "toml" => "🔧",
        "sql" => "🗄️",
        "txt" => "📝",
        _ => return None,
    };
    Some(emoji)
}

/// Built-in tables plus user overrides. Overrides take precedence.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap {
    tags: HashMap<String, String>,
    emojis: HashMap<String, String>,
}

impl LanguageMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fence tag for `ext` (matched case-insensitively).
    pub fn set_tag(&mut self, ext: &str, tag: impl Into<String>) {
        self.tags.insert(normalize_key(ext), tag.into());
    }

    /// Override the header emoji for `ext` (matched case-insensitively).
    pub fn set_emoji(&mut self, ext: &str, emoji: impl Into<String>) {
        self.emojis.insert(normalize_key(ext), emoji.into());
    }

    #[must_use]
    pub fn tag<'a>(&'a self, ext: &'a str) -> &'a str {
        self.tags
            .get(&normalize_key(ext))
            .map_or_else(|| language_tag(ext), String::as_str)
    }

    #[must_use]
    pub fn emoji<'a>(&'a self, ext: &str) -> &'a str {
        self.emojis
            .get(&normalize_key(ext))
            .map_or_else(|| emoji(ext), String::as_str)
    }
}

fn normalize_key(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}
