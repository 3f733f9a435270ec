// src/logging.rs
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// `RUST_LOG` fallback for the given `-v` count. Warnings always pass.
#[must_use]
pub fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Install `env_logger`, writing `<level>: <message>` lines to stderr.
/// An explicit `RUST_LOG` takes precedence over `-v`.
///
/// # Errors
/// Fails if another logger was installed first.
pub fn init(verbose: u8) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().filter_or("RUST_LOG", filter_for(verbose)))
        .format(|buf, record| writeln!(buf, "{}: {}", label(record.level()), record.args()))
        .try_init()
}
