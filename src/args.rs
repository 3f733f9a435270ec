// src/args.rs
use crate::parsers::ExtMapping;
use code_snapshot_engine::config::{DEFAULT_MAP_NAME, DEFAULT_OUT_DIR, DEFAULT_SNAPSHOT_NAME};
use clap::{Args as ClapArgs, ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code_snapshot",
    version = crate::VERSION,
    about = "Concatenate source files into one fenced Markdown snapshot"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub mapping: MappingOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Files to include, in order
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Directory receiving both documents (created if missing)
    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUT_DIR,
        value_hint = ValueHint::DirPath,
        help_heading = "Output"
    )]
    pub out_dir: PathBuf,

    /// File name of the combined snapshot document
    #[arg(long, default_value = DEFAULT_SNAPSHOT_NAME, help_heading = "Output")]
    pub snapshot_name: String,

    /// File name of the extension map document
    #[arg(long, default_value = DEFAULT_MAP_NAME, help_heading = "Output")]
    pub map_name: String,
}

#[derive(ClapArgs, Debug)]
pub struct MappingOptions {
    /// Override fence tags (e.g. h=cpp,mdx=markdown)
    #[arg(long, value_delimiter = ',', help_heading = "Mapping")]
    pub map_ext: Vec<ExtMapping>,

    /// Override header emoji (e.g. md=📘)
    #[arg(long, value_delimiter = ',', help_heading = "Mapping")]
    pub map_emoji: Vec<ExtMapping>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Fail on the first missing or unreadable input instead of skipping it
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
