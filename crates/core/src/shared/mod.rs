pub mod crop;
pub mod error;
pub mod frame;
pub mod timecode;
pub mod video_metadata;
