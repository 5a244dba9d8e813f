use crate::core::errors::Result;
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Sink that discards everything. Used when call logging is disabled
/// in the configuration.
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _level: LogLevel, _line: &str) -> Result<()> {
        Ok(())
    }
}
