/// Cross-cutting observer for pipeline progress.
///
/// Decouples the use case from a specific output surface: the CLI logs
/// through the `log` facade, tests plug in a silent or recording logger.
/// Progress is observational only — it never affects pipeline behavior.
pub trait PipelineLogger: Send {
    /// Report frame-level progress. `total` may be zero when the container
    /// does not declare a frame count.
    fn progress(&mut self, current: usize, total: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);
}

/// Silent logger that discards all events. Used by tests and embedders
/// with their own progress surface.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// Logger backed by the `log` facade, throttled to every
/// `throttle_frames` frames to avoid excessive output on long videos.
pub struct StdoutPipelineLogger {
    throttle_frames: usize,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
        }
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(30)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        if total > 0 && (current % self.throttle_frames == 0 || current == total) {
            let pct = current as f64 * 100.0 / total as f64;
            log::info!("Processing: {current}/{total} frames ({pct:.1}%)");
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }
}
