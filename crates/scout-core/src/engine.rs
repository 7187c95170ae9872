use crate::config::{AppConfig, PromptFormat};
use crate::context;
use crate::error::Error;
use crate::extractor::Extractor;
use crate::generator::TextGenerator;
use crate::insight::{analyze_directory, ContentInsight};
use crate::model::{DirectorySummary, FileSummary};
use crate::progress::ProgressReporter;
use crate::scanner::{self, FileDescriptor};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct ScoutEngine {
    config: AppConfig,
}

/// Everything one run produced: the enriched file list and the insight.
#[derive(Debug, Clone)]
pub struct ScoutReport {
    pub summary: DirectorySummary,
    pub insight: ContentInsight,
}

impl ScoutEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the full pipeline:
    /// 1. Walk the directory tree
    /// 2. Extract previews and details per file (parallel, order kept)
    /// 3. Categorize, classify and synthesize the insight
    pub fn run(&self, root: &Path, reporter: &dyn ProgressReporter) -> Result<ScoutReport, Error> {
        info!("Scanning {}", root.display());
        let scan = scanner::scan_directory(root, &self.config.ignore_patterns, reporter)?;

        let summary = self.summarize_files(&scan.root, scan.files, scan.subdirectories, reporter);
        let insight = analyze_directory(&summary, &self.config.rules);
        info!(
            "{}: {} files, domain {} ({:.0}%)",
            summary.directory.display(),
            summary.file_count,
            insight.domain,
            insight.confidence * 100.0
        );

        Ok(ScoutReport { summary, insight })
    }

    fn summarize_files(
        &self,
        root: &Path,
        files: Vec<FileDescriptor>,
        subdirectories: Vec<PathBuf>,
        reporter: &dyn ProgressReporter,
    ) -> DirectorySummary {
        let total = files.len();
        reporter.on_extract_start(total);
        let started = Instant::now();
        let done = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        let extract_one = |file: &FileDescriptor| {
            let summary = summarize_file(file);
            if summary.metadata.is_none() {
                failed.fetch_add(1, Ordering::Relaxed);
            }
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.on_extract_progress(n, total);
            summary
        };

        // collect() on an indexed parallel iterator keeps traversal order
        let summaries: Vec<FileSummary> = match self.thread_pool() {
            Some(pool) => pool.install(|| files.par_iter().map(extract_one).collect()),
            None => files.par_iter().map(extract_one).collect(),
        };

        let failed = failed.load(Ordering::Relaxed);
        let elapsed = started.elapsed().as_secs_f64();
        debug!(
            "Extraction completed in {:.2}s: {} files, {} without metadata",
            elapsed, total, failed
        );
        reporter.on_extract_complete(total, failed, elapsed);

        DirectorySummary {
            directory: root.to_path_buf(),
            file_count: summaries.len(),
            subdirectories,
            files: summaries,
        }
    }

    fn thread_pool(&self) -> Option<rayon::ThreadPool> {
        let workers = self.config.extract_workers?;
        match rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("scout-extract-{}", i))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Cannot build extraction pool of {} threads: {}", workers, e);
                None
            }
        }
    }
}

/// Extraction failures never escape: the file is kept as `unknown` with no
/// metadata.
fn summarize_file(file: &FileDescriptor) -> FileSummary {
    let summary = FileSummary::unextracted(file.name.clone(), file.extension.clone(), file.size);
    match Extractor::for_extension(&file.extension).extract(&file.path) {
        Ok(content) => summary.with_content(content),
        Err(e) => {
            warn!("Extraction failed for {}: {}", file.path.display(), e);
            summary
        }
    }
}

impl ScoutReport {
    /// Prompt text for the generation backend in the given format.
    pub fn prompt(&self, format: PromptFormat) -> Result<String, Error> {
        context::render_prompt(&self.insight, &self.summary, format)
    }

    pub fn summarize(
        &self,
        generator: &dyn TextGenerator,
        format: PromptFormat,
    ) -> Result<String, Error> {
        let prompt = self.prompt(format)?;
        debug!("Prompt is {} characters", prompt.chars().count());
        generator.generate(&prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Domain;
    use crate::extractor::ContentKind;
    use crate::progress::SilentReporter;
    use std::fs;
    use std::sync::Mutex;

    struct RecordingReporter {
        extract_total: Mutex<Option<usize>>,
        last_progress: AtomicUsize,
        failed: AtomicUsize,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_extract_start(&self, total_files: usize) {
            *self.extract_total.lock().unwrap() = Some(total_files);
        }
        fn on_extract_progress(&self, files_done: usize, _total_files: usize) {
            self.last_progress.fetch_max(files_done, Ordering::SeqCst);
        }
        fn on_extract_complete(&self, _total_files: usize, failed: usize, _secs: f64) {
            self.failed.store(failed, Ordering::SeqCst);
        }
    }

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn generate(&self, prompt: &str) -> Result<String, Error> {
            Ok(format!("{} chars", prompt.len()))
        }
    }

    struct DownGenerator;

    impl TextGenerator for DownGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, Error> {
            Err(Error::Generation {
                message: "backend unavailable".to_string(),
            })
        }
    }

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        fs::write(
            dir.path().join("main.go"),
            "package main\n\nimport \"fmt\"\n\nfunc main() { fmt.Println(1) }\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg").join("util.go"), "package pkg\n").unwrap();
        dir
    }

    #[test]
    fn test_run_keeps_traversal_order_with_workers() {
        let dir = project();
        let config = AppConfig {
            extract_workers: Some(4),
            ..AppConfig::default()
        };
        let report = ScoutEngine::new(config)
            .run(dir.path(), &SilentReporter)
            .unwrap();

        let names: Vec<&str> = report.summary.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["go.mod", "main.go", "util.go"]);
        assert_eq!(report.summary.file_count, 3);
        assert_eq!(report.summary.subdirectories.len(), 1);
        assert_eq!(report.insight.domain, Domain::Software);
        assert_eq!(report.summary.files[1].kind, ContentKind::Code);
    }

    #[test]
    fn test_reporter_sees_every_file() {
        let dir = project();
        let reporter = RecordingReporter {
            extract_total: Mutex::new(None),
            last_progress: AtomicUsize::new(0),
            failed: AtomicUsize::new(99),
        };
        ScoutEngine::new(AppConfig::default())
            .run(dir.path(), &reporter)
            .unwrap();
        assert_eq!(*reporter.extract_total.lock().unwrap(), Some(3));
        assert_eq!(reporter.last_progress.load(Ordering::SeqCst), 3);
        assert_eq!(reporter.failed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = ScoutEngine::new(AppConfig::default())
            .run(&missing, &SilentReporter)
            .unwrap_err();
        assert!(matches!(err, Error::Scan { .. }));
    }

    #[test]
    fn test_summarize_passes_prompt_and_surfaces_failure() {
        let dir = project();
        let report = ScoutEngine::new(AppConfig::default())
            .run(dir.path(), &SilentReporter)
            .unwrap();

        let prompt = report.prompt(PromptFormat::Plain).unwrap();
        let echoed = report.summarize(&EchoGenerator, PromptFormat::Plain).unwrap();
        assert_eq!(echoed, format!("{} chars", prompt.len()));

        let err = report
            .summarize(&DownGenerator, PromptFormat::Llama3)
            .unwrap_err();
        assert_eq!(err.to_string(), "Generation backend error: backend unavailable");
    }
}
