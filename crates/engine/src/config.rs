use crate::language::LanguageMap;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "snapshot";
pub const DEFAULT_SNAPSHOT_NAME: &str = "snapshot.md";
pub const DEFAULT_MAP_NAME: &str = "extension_map.md";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SnapshotConfig {
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(DEFAULT_OUT_DIR)")]
    pub out_dir: PathBuf,
    #[builder(default = "DEFAULT_SNAPSHOT_NAME.to_string()")]
    pub snapshot_name: String,
    #[builder(default = "DEFAULT_MAP_NAME.to_string()")]
    pub map_name: String,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub languages: LanguageMap,
}

impl SnapshotConfig {
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.out_dir.join(&self.snapshot_name)
    }

    #[must_use]
    pub fn map_path(&self) -> PathBuf {
        self.out_dir.join(&self.map_name)
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            inputs: vec![],
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            snapshot_name: DEFAULT_SNAPSHOT_NAME.to_string(),
            map_name: DEFAULT_MAP_NAME.to_string(),
            strict: false,
            languages: LanguageMap::default(),
        }
    }
}
