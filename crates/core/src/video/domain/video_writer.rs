use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Ordered encode of frames into an output container.
///
/// Opened once per run with the output dimensions (the crop rectangle's
/// width and height, not the source's) and closed on every exit path.
pub trait VideoWriter: Send {
    fn open(
        &mut self,
        path: &Path,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn write(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes and finalizes the container. Idempotent.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
