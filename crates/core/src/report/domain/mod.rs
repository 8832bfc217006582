pub mod detection_log;
pub mod log_sink;
