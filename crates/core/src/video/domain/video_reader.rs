use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Ordered decode of a video into frames with metadata.
///
/// Implementations own codec and container concerns; the pipeline sees
/// only `Frame` and `VideoMetadata`. Frames arrive strictly in decode
/// order and are produced lazily, never buffering the whole video.
pub trait VideoReader: Send {
    /// Opens a video file and reports its stream properties.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Iterator over frames in decode order. An exhausted source simply
    /// ends the iterator; mid-stream corruption surfaces as an `Err` item.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader. Idempotent.
    fn close(&mut self);
}
