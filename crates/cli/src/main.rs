use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use debar_core::detection::domain::bar_detector::BarDetector;
use debar_core::detection::infrastructure::edge_intensity_detector::EdgeIntensityDetector;
use debar_core::pipeline::frame_exporter::FrameExporter;
use debar_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use debar_core::pipeline::repair_video_use_case::RepairVideoUseCase;
use debar_core::report::domain::log_sink::DetectionLogSink;
use debar_core::report::infrastructure::json_log_writer::JsonLogWriter;
use debar_core::shared::crop::CropRect;
use debar_core::video::domain::video_reader::VideoReader;
use debar_core::video::domain::video_writer::VideoWriter;
use debar_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use debar_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use debar_core::video::infrastructure::image_file_writer::ImageFileWriter;

const DEFAULT_OUTPUT_FOLDER: &str = "processed_black_bars";

/// Detects and repairs black-bar frames in videos.
#[derive(Parser)]
#[command(name = "debar")]
struct Cli {
    /// Input video files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (single input only; defaults to
    /// <input_dir>/processed_black_bars/<name>.avi).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Crop region as left,top,right,bottom pixel bounds, applied before
    /// detection.
    #[arg(long, value_delimiter = ',', num_args = 1, value_name = "LEFT,TOP,RIGHT,BOTTOM")]
    crop: Option<Vec<u32>>,

    /// Save each flagged frame as a PNG still next to the output.
    #[arg(long)]
    export_frames: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let crop = cli.crop.as_deref().map(parse_crop);

    let mut failed = 0usize;
    for input in &cli.inputs {
        let output = match &cli.output {
            Some(path) => path.clone(),
            None => default_output_path(input),
        };

        log::info!("Processing {}", input.display());
        match repair_one(input, &output, crop, cli.export_frames) {
            Ok(detections) => {
                log::info!(
                    "Output written to {} ({detections} detections)",
                    output.display()
                );
            }
            Err(e) => {
                log::error!("Failed to process {}: {e}", input.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} input(s) failed", cli.inputs.len()).into());
    }
    Ok(())
}

/// Builds a fresh pipeline for one input and runs it to completion.
fn repair_one(
    input: &Path,
    output: &Path,
    crop: Option<CropRect>,
    export_frames: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut reader: Box<dyn VideoReader> = Box::new(FfmpegReader::new());
    let metadata = reader.open(input)?;

    let writer: Box<dyn VideoWriter> = Box::new(FfmpegWriter::new());
    let detector: Box<dyn BarDetector> = Box::new(EdgeIntensityDetector::new());
    let log_sink: Box<dyn DetectionLogSink> = Box::new(JsonLogWriter::new());

    let exporter = export_frames
        .then(|| FrameExporter::new(output, Box::new(ImageFileWriter::new())));

    let mut use_case = RepairVideoUseCase::new(
        reader,
        writer,
        detector,
        exporter,
        log_sink,
        Box::new(StdoutPipelineLogger::default()),
    );

    let log = use_case.execute(&metadata, crop, output)?;
    Ok(log.detection.len())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.output.is_some() && cli.inputs.len() > 1 {
        return Err("--output requires exactly one input".into());
    }
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
    }
    Ok(())
}

/// `<input_dir>/processed_black_bars/<stem>.avi`, next to the source.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_FOLDER)
        .join(format!("{stem}.avi"))
}

fn parse_crop(values: &[u32]) -> CropRect {
    // clap enforces num_args = 4.
    CropRect {
        left: values[0],
        top: values[1],
        right: values[2],
        bottom: values[3],
    }
}
