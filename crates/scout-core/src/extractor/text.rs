use super::{
    head_lines, truncate_chars, ContentDetails, ContentKind, ExtractError, ExtractedContent,
    DOCUMENT_PREVIEW_CHARS,
};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

const PREVIEW_LINES: usize = 20;
const GENERIC_READ_BYTES: u64 = 4096;

/// Markdown and plain text: first `# ` heading becomes the title.
pub(super) fn extract_markdown(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let data = fs::read(path)?;
    let content = String::from_utf8_lossy(&data);

    let title = content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|t| t.trim().to_string());

    Ok(ExtractedContent {
        kind: ContentKind::Text,
        preview: head_lines(&content, PREVIEW_LINES),
        lines: Some(content.split('\n').count()),
        details: ContentDetails::Markdown { title },
    })
}

/// Structured and unrecognized text formats. Only the head of the file is
/// decoded for the preview; the line count covers the whole file.
pub(super) fn extract_generic(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let file = File::open(path)?;
    let mut head = Vec::new();
    file.take(GENERIC_READ_BYTES).read_to_end(&mut head)?;
    let text = String::from_utf8_lossy(&head);
    let preview = truncate_chars(&head_lines(&text, PREVIEW_LINES), DOCUMENT_PREVIEW_CHARS);

    Ok(ExtractedContent {
        kind: ContentKind::Text,
        preview,
        lines: Some(count_lines(File::open(path)?)?),
        details: ContentDetails::PlainText,
    })
}

fn count_lines(mut reader: impl Read) -> io::Result<usize> {
    let mut buf = [0u8; 8192];
    let mut newlines = 0;
    let mut last = None;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        newlines += buf[..n].iter().filter(|&&b| b == b'\n').count();
        last = Some(buf[n - 1]);
    }
    Ok(match last {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    })
}
