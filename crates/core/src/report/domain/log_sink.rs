use std::path::Path;

use crate::report::domain::detection_log::DetectionLog;

/// Persists a detection log to a durable artifact.
///
/// The pipeline calls this exactly once, at successful completion; log
/// persistence and video output are independent failure domains.
pub trait DetectionLogSink: Send {
    fn write(&self, log: &DetectionLog, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}
