use std::time::Instant;

use crate::core::errors::Result;
use crate::core::observe::emit;
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Wrap a command handler with called/executed lines.
///
/// The "executed" line is only reached on the non-faulting path; a
/// fault from the handler propagates to the caller unchanged.
pub fn around<T>(
    sink: &dyn LogSink,
    handler: &str,
    call: impl FnOnce() -> Result<T>,
) -> Result<T> {
    emit(sink, LogLevel::Info, &format!("Handler called: {handler}"));
    let value = call()?;
    emit(sink, LogLevel::Info, &format!("Handler executed: {handler}"));
    Ok(value)
}

/// Wrap a call with wall-clock timing, opted into explicitly at the
/// call site. The call's own result passes through unchanged; the
/// timing line is emitted after a normal return.
pub fn with_timing<T>(
    sink: &dyn LogSink,
    method: &str,
    call: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let start = Instant::now();
    let value = call()?;
    let elapsed_ms = start.elapsed().as_millis();
    emit(
        sink,
        LogLevel::Info,
        &format!("{method} executed in {elapsed_ms}ms"),
    );
    Ok(value)
}
