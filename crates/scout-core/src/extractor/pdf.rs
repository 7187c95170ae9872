use super::{
    truncate_chars, ContentDetails, ContentKind, ExtractError, ExtractedContent,
    DOCUMENT_PREVIEW_CHARS,
};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

const MAX_PAGES: usize = 3;

pub const UNREADABLE_PREVIEW: &str =
    "[PDF content could not be extracted - likely encrypted or unsupported format]";
pub const NO_TEXT_PREVIEW: &str = "[Scanned or image-based PDF - no text extracted]";

/// Text of the first pages. Parser failures and parser panics (malformed
/// fonts, encryption) become a placeholder record, not an error; only the
/// initial file read can fail.
pub(super) fn extract(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let bytes = fs::read(path)?;

    let pages = match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!("PDF extraction failed for {}: {}", path.display(), e);
            return Ok(unreadable());
        }
        Err(_) => {
            warn!("PDF parser panicked on {}", path.display());
            return Ok(unreadable());
        }
    };

    let mut text = String::new();
    for page in pages.iter().take(MAX_PAGES) {
        text.push_str(page);
        text.push('\n');
    }

    let preview = if text.trim().is_empty() {
        NO_TEXT_PREVIEW.to_string()
    } else {
        truncate_chars(&text, DOCUMENT_PREVIEW_CHARS)
    };
    debug!("PDF {}: {} pages", path.display(), pages.len());

    Ok(ExtractedContent {
        kind: ContentKind::Document,
        preview,
        lines: None,
        details: ContentDetails::Pdf {
            pages: Some(pages.len()),
            error: None,
        },
    })
}

fn unreadable() -> ExtractedContent {
    ExtractedContent {
        kind: ContentKind::Document,
        preview: UNREADABLE_PREVIEW.to_string(),
        lines: None,
        details: ContentDetails::Pdf {
            pages: None,
            error: Some("read_failed".to_string()),
        },
    }
}
