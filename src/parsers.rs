use std::str::FromStr;

/// `EXT=VALUE` pair used by `--map-ext` / `--map-emoji`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtMapping {
    pub ext: String,
    pub value: String,
}

impl FromStr for ExtMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ext, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected EXT=VALUE, got: {s}"))?;
        let ext = ext.trim().trim_start_matches('.');
        let value = value.trim();
        if ext.is_empty() {
            return Err(format!("Missing extension in mapping: {s}"));
        }
        if value.is_empty() {
            return Err(format!("Missing value in mapping: {s}"));
        }
        Ok(Self {
            ext: ext.to_string(),
            value: value.to_string(),
        })
    }
}
