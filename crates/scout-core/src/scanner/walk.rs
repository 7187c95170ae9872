use super::{EntryKind, FileDescriptor, ScanResult};
use crate::error::Error;
use crate::filetypes;
use crate::progress::ProgressReporter;
use glob::Pattern;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};
use walkdir::{DirEntry, WalkDir};

/// Recursive traversal of `root`. Dot-prefixed entries and entries matching
/// `ignore_globs` are skipped, and skipped directories are not descended into.
///
/// Only an unreadable root is an error; per-entry failures (permissions,
/// broken links) are logged and skipped.
pub fn scan_directory(
    root: &Path,
    ignore_globs: &[String],
    reporter: &dyn ProgressReporter,
) -> Result<ScanResult, Error> {
    fs::read_dir(root).map_err(|source| Error::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    reporter.on_scan_start();
    let started = Instant::now();

    let mut result = ScanResult {
        root: root.to_path_buf(),
        files: Vec::new(),
        subdirectories: Vec::new(),
    };

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, &ignore_patterns));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            result.subdirectories.push(entry.path().to_path_buf());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        // Follows symlinks; a dangling link counts as zero bytes.
        let size = fs::metadata(entry.path()).map(|m| m.len()).unwrap_or(0);

        result.files.push(FileDescriptor {
            extension: filetypes::extension_of(&name),
            name,
            path: entry.path().to_path_buf(),
            kind: EntryKind::File,
            size,
        });
        reporter.on_scan_progress(result.files.len(), &entry.path().to_string_lossy());
    }

    let elapsed = started.elapsed().as_secs_f64();
    reporter.on_scan_complete(result.files.len(), elapsed);
    info!(
        "Scanned {} in {:.2}s: {} files, {} subdirectories",
        root.display(),
        elapsed,
        result.files.len(),
        result.subdirectories.len()
    );

    Ok(result)
}

fn is_excluded(entry: &DirEntry, ignore_patterns: &[Pattern]) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
        || ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(entry.path()))
}
