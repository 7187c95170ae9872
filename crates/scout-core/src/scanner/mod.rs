mod walk;

pub use walk::scan_directory;

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// One non-hidden entry found by the walk. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct FileDescriptor {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Lowercase, without the leading dot. Empty when the name has none.
    pub extension: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub root: PathBuf,
    /// Files only, in traversal order.
    pub files: Vec<FileDescriptor>,
    /// Every visited directory except the root, in traversal order.
    pub subdirectories: Vec<PathBuf>,
}

impl ScanResult {
    /// Human-readable listing of files and subdirectories (relative to root).
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Directory: {}\n", self.root.display());
        out.push_str("Files:\n");
        for file in &self.files {
            let ext = if file.extension.is_empty() {
                "-".to_string()
            } else {
                format!(".{}", file.extension)
            };
            let _ = writeln!(out, "  - {} ({}, {} bytes)", file.name, ext, file.size);
        }

        out.push_str("\nSubdirectories:\n");
        for sub in &self.subdirectories {
            let rel = sub.strip_prefix(&self.root).unwrap_or(sub.as_path());
            let _ = writeln!(out, "  - {}", rel.display());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_lists_relative_subdirectories() {
        let result = ScanResult {
            root: PathBuf::from("/data"),
            files: vec![FileDescriptor {
                name: "notes.md".to_string(),
                path: PathBuf::from("/data/notes.md"),
                kind: EntryKind::File,
                extension: "md".to_string(),
                size: 42,
            }],
            subdirectories: vec![PathBuf::from("/data/archive/2023")],
        };

        let text = result.pretty();
        assert!(text.contains("notes.md (.md, 42 bytes)"));
        assert!(text.contains("  - archive/2023"));
        assert!(!text.contains("/data/archive"));
    }
}
