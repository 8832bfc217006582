use std::fs;
use std::path::Path;

use crate::report::domain::detection_log::DetectionLog;
use crate::report::domain::log_sink::DetectionLogSink;

/// Serializes detection logs as pretty-printed JSON via serde_json.
///
/// Creates intermediate directories as needed and overwrites any existing
/// file at the target path; there is no merging with prior contents.
pub struct JsonLogWriter;

impl JsonLogWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionLogSink for JsonLogWriter {
    fn write(&self, log: &DetectionLog, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(log)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::bar_detector::BarSide;
    use crate::shared::timecode::Timecode;

    fn sample_log() -> DetectionLog {
        let mut log = DetectionLog::new(Path::new("/a/in.mp4"), Path::new("/a/out.avi"));
        log.record(Timecode::from_frame(1, 1.0), BarSide::Left);
        log
    }

    #[test]
    fn test_write_creates_file_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detection_logs").join("out.json");

        JsonLogWriter::new().write(&sample_log(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"video\": \"in.mp4\""));
        assert!(text.contains("\"time\": \"00:01\""));
        assert!(text.contains("\"side\": \"left\""));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents").unwrap();

        JsonLogWriter::new().write(&sample_log(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.contains("in.mp4"));
    }

    #[test]
    fn test_write_empty_detection_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let log = DetectionLog::new(Path::new("/a/in.mp4"), Path::new("/a/out.avi"));

        JsonLogWriter::new().write(&log, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"detection\": []"));
    }

    #[test]
    fn test_unwritable_target_errors() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "detection_logs" is a file, so create_dir_all fails.
        let blocker = dir.path().join("detection_logs");
        fs::write(&blocker, "not a directory").unwrap();

        let result = JsonLogWriter::new().write(&sample_log(), &blocker.join("out.json"));
        assert!(result.is_err());
    }
}
