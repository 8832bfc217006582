use std::fmt;

use serde::{Serialize, Serializer};

/// A minute:second position on the video timeline, derived from a frame
/// index and the source frame rate.
///
/// Serializes as a zero-padded `"MM:SS"` string, matching the detection
/// log format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timecode {
    minutes: u32,
    seconds: u32,
}

impl Timecode {
    /// Computes the timeline position of `frame_index` at `fps`.
    ///
    /// Sub-second remainders are truncated. A non-positive frame rate
    /// clamps to 00:00 rather than dividing by zero.
    pub fn from_frame(frame_index: usize, fps: f64) -> Self {
        let elapsed = if fps > 0.0 {
            frame_index as f64 / fps
        } else {
            0.0
        };
        Self {
            minutes: (elapsed / 60.0).floor() as u32,
            seconds: (elapsed % 60.0).floor() as u32,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// File name used when exporting the flagged frame as a still image.
    pub fn still_file_name(&self) -> String {
        format!("{:02}-{:02}.png", self.minutes, self.seconds)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl Serialize for Timecode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 30.0, "00:00")]
    #[case(90, 30.0, "00:03")]
    #[case(3, 1.0, "00:03")]
    #[case(125, 1.0, "02:05")]
    #[case(59, 1.0, "00:59")]
    #[case(60, 1.0, "01:00")]
    #[case(3600, 1.0, "60:00")]
    #[case(1, 2.0, "00:00")] // 0.5s truncates
    fn test_from_frame_formats(#[case] index: usize, #[case] fps: f64, #[case] expected: &str) {
        assert_eq!(Timecode::from_frame(index, fps).to_string(), expected);
    }

    #[test]
    fn test_zero_fps_clamps_to_start() {
        assert_eq!(Timecode::from_frame(100, 0.0).to_string(), "00:00");
    }

    #[test]
    fn test_still_file_name() {
        let tc = Timecode::from_frame(5, 1.0);
        assert_eq!(tc.still_file_name(), "00-05.png");

        let tc = Timecode::from_frame(125, 1.0);
        assert_eq!(tc.still_file_name(), "02-05.png");
    }

    #[test]
    fn test_ordering_follows_timeline() {
        let earlier = Timecode::from_frame(59, 1.0);
        let later = Timecode::from_frame(61, 1.0);
        assert!(earlier < later);
    }

    #[test]
    fn test_serializes_as_string() {
        let tc = Timecode::from_frame(61, 1.0);
        assert_eq!(serde_json::to_string(&tc).unwrap(), "\"01:01\"");
    }
}
