use crate::core::errors::Result;
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Sink that fans every line out to several downstream sinks.
///
/// All downstream sinks are attempted even when one fails; the first
/// failure is reported after the rest have been tried.
pub struct TeeSink {
    sinks: Vec<Box<dyn LogSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for TeeSink {
    fn write(&self, level: LogLevel, line: &str) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(error) = sink.write(level, line)
                && first_error.is_none()
            {
                first_error = Some(error);
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
