use std::path::PathBuf;

/// Source stream properties reported by a reader when a file is opened.
///
/// `total_frames` comes from container metadata and is observational only
/// (progress reporting); correctness never depends on it.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}
