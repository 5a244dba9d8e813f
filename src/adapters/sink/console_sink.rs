use colored::Colorize;

use crate::core::errors::Result;
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Sink that renders log lines on the terminal.
///
/// Info lines are dimmed so they read as background chatter next to
/// the command's own output; error lines go to stderr in red.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) -> Result<()> {
        match level {
            LogLevel::Info => println!("  {} {}", "·".dimmed(), line.dimmed()),
            LogLevel::Error => eprintln!("  {} {}", "✗".red(), line.red()),
        }
        Ok(())
    }
}
