use ndarray::{s, ArrayView3};

use crate::detection::domain::bar_detector::{BarClassification, BarDetector, BarSide};
use crate::shared::frame::Frame;

/// Columns/rows sampled at each edge.
pub const EDGE_BAND_WIDTH: usize = 5;

/// Mean intensity below which a band counts as a bar, on the 0-255 scale.
pub const INTENSITY_THRESHOLD: f64 = 10.0;

/// Classifies frames by mean intensity of fixed-width edge bands.
///
/// Edges are checked in a fixed order and the first match wins: left
/// column band, then right column band, then top row band. Frames
/// narrower or shorter than the band are sampled in full.
pub struct EdgeIntensityDetector {
    band_width: usize,
    threshold: f64,
}

impl EdgeIntensityDetector {
    pub fn new() -> Self {
        Self {
            band_width: EDGE_BAND_WIDTH,
            threshold: INTENSITY_THRESHOLD,
        }
    }

    /// Detector with non-default parameters, used by tests and tuning.
    pub fn with_params(band_width: usize, threshold: f64) -> Self {
        Self {
            band_width: band_width.max(1),
            threshold,
        }
    }
}

impl Default for EdgeIntensityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BarDetector for EdgeIntensityDetector {
    fn classify(&self, frame: &Frame) -> BarClassification {
        let pixels = frame.as_ndarray();
        let width = frame.width() as usize;
        let height = frame.height() as usize;

        let cols = self.band_width.min(width);
        let rows = self.band_width.min(height);

        let left = band_mean(pixels.slice(s![.., ..cols, ..]));
        if left < self.threshold {
            return BarClassification::Bar {
                side: BarSide::Left,
                mean_intensity: left,
            };
        }

        let right_start = width - cols;
        let right = band_mean(pixels.slice(s![.., right_start.., ..]));
        if right < self.threshold {
            return BarClassification::Bar {
                side: BarSide::Right,
                mean_intensity: right,
            };
        }

        let top = band_mean(pixels.slice(s![..rows, .., ..]));
        if top < self.threshold {
            return BarClassification::Bar {
                side: BarSide::Top,
                mean_intensity: top,
            };
        }

        BarClassification::Clear
    }
}

/// Mean pixel value of a band across all positions and channels.
fn band_mean(band: ArrayView3<'_, u8>) -> f64 {
    let len = band.len();
    if len == 0 {
        return f64::from(u8::MAX);
    }
    band.iter().map(|&v| f64::from(v)).sum::<f64>() / len as f64
}
