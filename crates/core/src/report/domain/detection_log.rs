use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::detection::domain::bar_detector::BarSide;
use crate::shared::timecode::Timecode;

/// One observed bar: where on the timeline and on which edge.
///
/// Events are append-only and never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DetectionEvent {
    pub time: Timecode,
    pub side: BarSide,
}

/// Accumulated record of a repair run, persisted as JSON on success.
///
/// Field order matches the serialized layout consumed by downstream
/// tooling: folder, video, output_folder, detection.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionLog {
    pub folder: String,
    pub video: String,
    pub output_folder: String,
    pub detection: Vec<DetectionEvent>,
}

impl DetectionLog {
    /// Empty log for a run from `source` to `output`.
    pub fn new(source: &Path, output: &Path) -> Self {
        Self {
            folder: parent_string(source),
            video: source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output_folder: parent_string(output),
            detection: Vec::new(),
        }
    }

    pub fn record(&mut self, time: Timecode, side: BarSide) {
        self.detection.push(DetectionEvent { time, side });
    }

    pub fn is_empty(&self) -> bool {
        self.detection.is_empty()
    }
}

fn parent_string(path: &Path) -> String {
    path.parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Where the log for a given output video is persisted:
/// `<output_dir>/detection_logs/<basename>.json`.
pub fn log_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("detection_logs")
        .join(format!("{stem}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_fields_from_paths() {
        let log = DetectionLog::new(
            Path::new("/videos/raw/match.mp4"),
            Path::new("/videos/raw/processed_black_bars/match.avi"),
        );
        assert_eq!(log.folder, "/videos/raw");
        assert_eq!(log.video, "match.mp4");
        assert_eq!(log.output_folder, "/videos/raw/processed_black_bars");
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut log = DetectionLog::new(Path::new("/a/in.mp4"), Path::new("/a/out.avi"));
        log.record(Timecode::from_frame(1, 1.0), BarSide::Left);
        log.record(Timecode::from_frame(2, 1.0), BarSide::Top);

        assert_eq!(log.detection.len(), 2);
        assert_eq!(log.detection[0].side, BarSide::Left);
        assert_eq!(log.detection[1].side, BarSide::Top);
        assert!(log.detection[0].time <= log.detection[1].time);
    }

    #[test]
    fn test_serialized_shape() {
        let mut log = DetectionLog::new(Path::new("/a/in.mp4"), Path::new("/a/out.avi"));
        log.record(Timecode::from_frame(1, 1.0), BarSide::Left);

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["folder"], "/a");
        assert_eq!(json["video"], "in.mp4");
        assert_eq!(json["output_folder"], "/a");
        assert_eq!(json["detection"][0]["time"], "00:01");
        assert_eq!(json["detection"][0]["side"], "left");
    }

    #[test]
    fn test_log_path_for_output() {
        let path = log_path_for(Path::new("/videos/out/match.avi"));
        assert_eq!(path, Path::new("/videos/out/detection_logs/match.json"));
    }

    #[test]
    fn test_log_path_for_bare_name() {
        let path = log_path_for(Path::new("match.avi"));
        assert_eq!(path, Path::new("detection_logs/match.json"));
    }
}
