/// Trait for reporting pipeline progress.
///
/// The CLI implements it with indicatif bars; library callers and tests use
/// [`SilentReporter`]. All methods have default no-op implementations.
/// Extraction callbacks may arrive from rayon worker threads.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_scan_progress(&self, _files_found: usize, _current_path: &str) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_extract_start(&self, _total_files: usize) {}
    fn on_extract_progress(&self, _files_done: usize, _total_files: usize) {}
    fn on_extract_complete(&self, _total_files: usize, _failed: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
