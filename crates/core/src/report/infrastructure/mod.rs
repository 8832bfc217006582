pub mod json_log_writer;
