pub mod frame_exporter;
pub mod pipeline_logger;
pub mod repair_video_use_case;
