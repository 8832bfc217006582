use serde::{Deserialize, Serialize};

use crate::shared::frame::Frame;

/// Frame edge on which a bar was observed.
///
/// Only the left, right and top edges are sampled; the bottom edge is
/// never reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarSide {
    Left,
    Right,
    Top,
}

/// Outcome of classifying one cropped frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarClassification {
    /// No edge band fell below the intensity threshold.
    Clear,
    /// A near-black band was found; `mean_intensity` is the band's mean
    /// pixel value on the 0-255 scale.
    Bar {
        side: BarSide,
        mean_intensity: f64,
    },
}

/// Domain interface for per-frame bar detection.
///
/// Pure query: implementations must not mutate state or perform I/O.
pub trait BarDetector: Send {
    fn classify(&self, frame: &Frame) -> BarClassification;
}
