use crate::core::errors::Result;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    /// Fixed-width tag used by file output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Port for the call-log sink.
///
/// Implementations live in `adapters::sink`. Writes may fail (a full
/// disk, a bad path); the interception layer treats every write as
/// best-effort, so a sink fault can never change the outcome of the
/// call being observed.
pub trait LogSink: Send + Sync {
    /// Append one leveled line to the sink.
    fn write(&self, level: LogLevel, line: &str) -> Result<()>;
}
