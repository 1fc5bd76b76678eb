use sloggers::{
    Build,
    terminal::{TerminalLoggerBuilder, Destination},
    types::Severity,
};

use crate::config::Config;

pub type Logger = slog::Logger;

pub fn get_logger(config: &Config) -> Result<Logger, sloggers::Error> {
    let mut builder = TerminalLoggerBuilder::new();

    let level = match config.env_name {
        "development" => Severity::Debug,
        "production" => Severity::Error,
        "testing" => Severity::Warning,
        _ => Severity::Trace,
    };

    builder.level(level);
    builder.destination(Destination::Stdout);
    builder.build()
}

/// Returns a logger which drops every record.
pub fn discard() -> Logger {
    slog::Logger::root(slog::Discard, o!())
}
