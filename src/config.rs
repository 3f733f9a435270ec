// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::parsers::ExtMapping;
pub use code_snapshot_engine::config::{SnapshotConfig, SnapshotConfigBuilder};
use code_snapshot_engine::language::LanguageMap;

impl TryFrom<Args> for SnapshotConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let languages = language_map_from(&args.mapping.map_ext, &args.mapping.map_emoji);

        let config = SnapshotConfigBuilder::default()
            .inputs(args.paths)
            .out_dir(args.output.out_dir)
            .snapshot_name(args.output.snapshot_name)
            .map_name(args.output.map_name)
            .strict(args.behavior.strict)
            .languages(languages)
            .build()?;
        Ok(config)
    }
}

fn language_map_from(tags: &[ExtMapping], emojis: &[ExtMapping]) -> LanguageMap {
    let mut map = LanguageMap::new();
    for m in tags {
        map.set_tag(&m.ext, m.value.as_str());
    }
    for m in emojis {
        map.set_emoji(&m.ext, m.value.as_str());
    }
    map
}
