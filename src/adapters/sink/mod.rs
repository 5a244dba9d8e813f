pub mod console_sink;
pub mod file_sink;
pub mod null_sink;
pub mod tee_sink;
