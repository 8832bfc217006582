use std::path::Path;

use crate::detection::domain::bar_detector::{BarClassification, BarDetector};
use crate::pipeline::frame_exporter::FrameExporter;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::report::domain::detection_log::{log_path_for, DetectionLog};
use crate::report::domain::log_sink::DetectionLogSink;
use crate::shared::crop::CropRect;
use crate::shared::error::RepairError;
use crate::shared::timecode::Timecode;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;
use crate::video::domain::video_writer::VideoWriter;

/// Orchestrates one repair run: stream frames from a source, crop, detect
/// bars, substitute or pass through, write to a sink, and persist the
/// detection log.
///
/// Single-use struct: `execute` consumes the owned reader and writer, so
/// calling it twice fails. One instance per video; instances share no
/// mutable state, so callers may run several in parallel for distinct
/// files.
pub struct RepairVideoUseCase {
    reader: Option<Box<dyn VideoReader>>,
    writer: Option<Box<dyn VideoWriter>>,
    detector: Box<dyn BarDetector>,
    exporter: Option<FrameExporter>,
    log_sink: Box<dyn DetectionLogSink>,
    logger: Box<dyn PipelineLogger>,
}

impl RepairVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        writer: Box<dyn VideoWriter>,
        detector: Box<dyn BarDetector>,
        exporter: Option<FrameExporter>,
        log_sink: Box<dyn DetectionLogSink>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader: Some(reader),
            writer: Some(writer),
            detector,
            exporter,
            log_sink,
            logger,
        }
    }

    /// Runs the full pipeline for one video.
    ///
    /// `metadata` comes from the reader's `open` call; `crop` defaults to
    /// the full frame. Returns the accumulated detection log. Source and
    /// sink handles are released on every exit path. A failure to persist
    /// the log is only warned about — the output video stays valid.
    pub fn execute(
        &mut self,
        metadata: &VideoMetadata,
        crop: Option<CropRect>,
        output_path: &Path,
    ) -> Result<DetectionLog, RepairError> {
        let crop = crop.unwrap_or_else(|| CropRect::full(metadata.width, metadata.height));
        crop.validate(metadata.width, metadata.height)?;

        let source_path = metadata
            .source_path
            .clone()
            .ok_or_else(|| RepairError::Input("metadata carries no source path".to_string()))?;

        let mut reader = self
            .reader
            .take()
            .ok_or_else(|| RepairError::Input("pipeline already executed".to_string()))?;
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| RepairError::Input("pipeline already executed".to_string()))?;

        let result = self.stream(
            reader.as_mut(),
            writer.as_mut(),
            metadata,
            &crop,
            &source_path,
            output_path,
        );

        reader.close();
        let close_result = writer.close();

        let log = result?;
        close_result.map_err(encode_err)?;

        let log_path = log_path_for(output_path);
        if let Err(e) = self.log_sink.write(&log, &log_path) {
            log::warn!(
                "failed to persist detection log to {}: {e}",
                log_path.display()
            );
        }

        Ok(log)
    }

    /// The forward pass: priming, then one decode-classify-write step per
    /// frame until the source is exhausted.
    fn stream(
        &mut self,
        reader: &mut dyn VideoReader,
        writer: &mut dyn VideoWriter,
        metadata: &VideoMetadata,
        crop: &CropRect,
        source_path: &Path,
        output_path: &Path,
    ) -> Result<DetectionLog, RepairError> {
        let mut log = DetectionLog::new(source_path, output_path);
        let fps = metadata.fps;
        let total = metadata.total_frames;

        let mut frames = reader.frames();

        // Priming: the first frame seeds last_good unconditionally and is
        // never run through the detector, so it can't be a substitution
        // candidate even if it contains a bar itself.
        let first = frames
            .next()
            .ok_or_else(|| RepairError::Decode("source yielded no frames".to_string()))?
            .map_err(decode_err)?;
        let mut last_good = first.crop(crop);

        // The sink opens only after the first decode succeeds; an empty or
        // corrupt source leaves no output file behind.
        let output_meta = VideoMetadata {
            width: crop.width(),
            height: crop.height(),
            ..metadata.clone()
        };
        writer.open(output_path, &output_meta).map_err(encode_err)?;
        writer.write(&last_good).map_err(encode_err)?;

        let mut frame_index: usize = 1;

        for decoded in frames {
            let frame = decoded.map_err(decode_err)?.crop(crop);

            match self.detector.classify(&frame) {
                BarClassification::Bar { side, .. } => {
                    // Substitute: last_good itself stays untouched.
                    writer.write(&last_good).map_err(encode_err)?;

                    let time = Timecode::from_frame(frame_index, fps);
                    log.record(time, side);

                    if let Some(exporter) = self.exporter.as_mut() {
                        if let Err(e) = exporter.export(&frame, time) {
                            log::warn!("failed to export flagged frame at {time}: {e}");
                        }
                    }
                }
                BarClassification::Clear => {
                    writer.write(&frame).map_err(encode_err)?;
                    last_good = frame;
                }
            }

            frame_index += 1;
            self.logger.progress(frame_index, total);
        }

        self.logger.info(&format!(
            "{frame_index} frames processed, {} repaired",
            log.detection.len()
        ));

        Ok(log)
    }
}

fn decode_err(e: Box<dyn std::error::Error>) -> RepairError {
    RepairError::Decode(e.to_string())
}

fn encode_err(e: Box<dyn std::error::Error>) -> RepairError {
    RepairError::Encode(e.to_string())
}
