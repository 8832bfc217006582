use std::path::{Path, PathBuf};

use crate::shared::frame::Frame;
use crate::shared::timecode::Timecode;
use crate::video::domain::image_writer::ImageWriter;

/// Persists a still image of every flagged frame.
///
/// Stills land in `<output-basename>_frames/` next to the output video,
/// named `MM-SS.png` after the detection timecode. The folder appears
/// lazily on the first write; constructing the exporter alone touches
/// nothing on disk.
pub struct FrameExporter {
    folder: PathBuf,
    writer: Box<dyn ImageWriter>,
}

impl FrameExporter {
    pub fn new(output_path: &Path, writer: Box<dyn ImageWriter>) -> Self {
        let stem = output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            folder: output_path.with_file_name(format!("{stem}_frames")),
            writer,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Writes `frame` as `<folder>/MM-SS.png`. A second detection within
    /// the same second overwrites the earlier still.
    pub fn export(&mut self, frame: &Frame, time: Timecode) -> Result<(), Box<dyn std::error::Error>> {
        self.writer
            .write(&self.folder.join(time.still_file_name()), frame)
    }
}
