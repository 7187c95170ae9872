//! Per-format content readers.
//!
//! [`Extractor::for_extension`] picks exactly one reader per file; each reader
//! turns a path into an [`ExtractedContent`] with a bounded preview and a
//! typed [`ContentDetails`] variant.

mod binary;
mod code;
mod docx;
mod pdf;
mod spreadsheet;
mod text;

use crate::filetypes;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Maximum preview length, in characters, for document-style extractors.
pub const DOCUMENT_PREVIEW_CHARS: usize = 1000;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Code,
    Document,
    Spreadsheet,
    Text,
    Binary,
    /// Extraction failed; never produced by an extractor itself.
    #[default]
    Unknown,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Code => "code",
            ContentKind::Document => "document",
            ContentKind::Spreadsheet => "spreadsheet",
            ContentKind::Text => "text",
            ContentKind::Binary => "binary",
            ContentKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ContentDetails {
    Code {
        imports: Vec<String>,
    },
    Pdf {
        #[serde(skip_serializing_if = "Option::is_none")]
        pages: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Docx,
    Spreadsheet {
        sheet_name: String,
        total_rows: usize,
    },
    Markdown {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    PlainText,
    Binary {
        size_bytes: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedContent {
    pub kind: ContentKind,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    pub details: ContentDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    Code,
    Pdf,
    Docx,
    Spreadsheet,
    Markdown,
    GenericText,
    Binary,
}

impl Extractor {
    /// Dispatch on a lowercase extension without the dot.
    pub fn for_extension(ext: &str) -> Extractor {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        match ext {
            _ if filetypes::is_code(ext) => Extractor::Code,
            "pdf" => Extractor::Pdf,
            "docx" | "doc" => Extractor::Docx,
            "xlsx" | "xls" => Extractor::Spreadsheet,
            "md" | "txt" => Extractor::Markdown,
            _ if filetypes::STRUCTURED_TEXT_EXTENSIONS.contains(&ext) => Extractor::GenericText,
            _ if filetypes::is_image(ext)
                || filetypes::is_video(ext)
                || filetypes::is_audio(ext) =>
            {
                Extractor::Binary
            }
            _ if filetypes::is_probably_text(ext) => Extractor::GenericText,
            _ => Extractor::Binary,
        }
    }

    pub fn extract(&self, path: &Path) -> Result<ExtractedContent, ExtractError> {
        match self {
            Extractor::Code => code::extract(path),
            Extractor::Pdf => pdf::extract(path),
            Extractor::Docx => docx::extract(path),
            Extractor::Spreadsheet => spreadsheet::extract(path),
            Extractor::Markdown => text::extract_markdown(path),
            Extractor::GenericText => text::extract_generic(path),
            Extractor::Binary => binary::extract(path),
        }
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "...".
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// First `max_lines` lines of `text`, joined with '\n'.
pub(crate) fn head_lines(text: &str, max_lines: usize) -> String {
    text.split('\n').take(max_lines).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        assert_eq!(Extractor::for_extension("go"), Extractor::Code);
        assert_eq!(Extractor::for_extension("RS"), Extractor::Code);
        assert_eq!(Extractor::for_extension("pdf"), Extractor::Pdf);
        assert_eq!(Extractor::for_extension("doc"), Extractor::Docx);
        assert_eq!(Extractor::for_extension("xls"), Extractor::Spreadsheet);
        assert_eq!(Extractor::for_extension("md"), Extractor::Markdown);
        assert_eq!(Extractor::for_extension("csv"), Extractor::GenericText);
        assert_eq!(Extractor::for_extension("cmake"), Extractor::GenericText);
        assert_eq!(Extractor::for_extension("png"), Extractor::Binary);
        assert_eq!(Extractor::for_extension("mp4"), Extractor::Binary);
    }

    #[test]
    fn test_fallback_uses_text_allow_list() {
        assert_eq!(Extractor::for_extension("sh"), Extractor::GenericText);
        assert_eq!(Extractor::for_extension("log"), Extractor::GenericText);
        assert_eq!(Extractor::for_extension("exe"), Extractor::Binary);
        assert_eq!(Extractor::for_extension(""), Extractor::Binary);
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_details_serialize_with_format_tag() {
        let details = ContentDetails::Spreadsheet {
            sheet_name: "Budget".to_string(),
            total_rows: 12,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["format"], "spreadsheet");
        assert_eq!(json["sheet_name"], "Budget");
    }
}
