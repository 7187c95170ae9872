use crate::extractor::{ContentDetails, ContentKind, ExtractedContent};
use serde::Serialize;
use std::path::PathBuf;

/// Extraction output kept on a [`FileSummary`] when the extractor succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileMetadata {
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    pub details: ContentDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    pub name: String,
    /// Lowercase, without the leading dot.
    pub extension: String,
    #[serde(rename = "size_bytes")]
    pub size: u64,
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
}

impl FileSummary {
    /// A file whose extraction failed: kind `unknown`, no metadata.
    pub fn unextracted(name: impl Into<String>, extension: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            size,
            kind: ContentKind::Unknown,
            metadata: None,
        }
    }

    pub fn with_content(mut self, content: ExtractedContent) -> Self {
        self.kind = content.kind;
        self.metadata = Some(FileMetadata {
            preview: content.preview,
            lines: content.lines,
            details: content.details,
        });
        self
    }

    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectorySummary {
    pub directory: PathBuf,
    pub file_count: usize,
    pub subdirectories: Vec<PathBuf>,
    pub files: Vec<FileSummary>,
}
