pub mod logged_api;
pub mod wrappers;

use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Best-effort write. A failing sink must never alter the outcome of
/// the call being observed, so write errors stop here.
pub(crate) fn emit(sink: &dyn LogSink, level: LogLevel, line: &str) {
    let _ = sink.write(level, line);
}
