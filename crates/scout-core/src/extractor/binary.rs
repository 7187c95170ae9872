use super::{ContentDetails, ContentKind, ExtractError, ExtractedContent};
use std::fs;
use std::path::Path;

pub(super) fn extract(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let metadata = fs::metadata(path)?;

    Ok(ExtractedContent {
        kind: ContentKind::Binary,
        preview: String::new(),
        lines: None,
        details: ContentDetails::Binary {
            size_bytes: metadata.len(),
        },
    })
}
