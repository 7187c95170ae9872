use super::{
    truncate_chars, ContentDetails, ContentKind, ExtractError, ExtractedContent,
    DOCUMENT_PREVIEW_CHARS,
};
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Word documents are zip archives; the body text lives in one XML part.
/// Legacy binary `.doc` files fail to open as archives and surface as errors.
pub(super) fn extract(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let mut archive = ZipArchive::new(File::open(path)?)?;

    let xml = match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            let mut xml = String::new();
            part.read_to_string(&mut xml)?;
            xml
        }
        Err(ZipError::FileNotFound) => String::new(),
        Err(e) => return Err(e.into()),
    };

    Ok(ExtractedContent {
        kind: ContentKind::Document,
        preview: truncate_chars(&document_text(&xml)?, DOCUMENT_PREVIEW_CHARS),
        lines: None,
        details: ContentDetails::Docx,
    })
}

/// Character data of an XML document, one space between the text of
/// different elements. References and CDATA sections are decoded.
fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::with_capacity(xml.len() / 4);
    let mut segment = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(text) => segment.push_str(&text.decode()?),
            Event::CData(data) => segment.push_str(&data.decode()?),
            Event::GeneralRef(reference) => push_reference(&mut segment, &reference)?,
            Event::Start(_) | Event::End(_) | Event::Empty(_) => {
                push_segment(&mut out, &segment);
                segment.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    push_segment(&mut out, &segment);
    Ok(out)
}

/// Unknown named entities are kept verbatim.
fn push_reference(segment: &mut String, reference: &BytesRef<'_>) -> Result<(), quick_xml::Error> {
    if let Some(ch) = reference.resolve_char_ref()? {
        segment.push(ch);
        return Ok(());
    }
    let name = reference.decode()?;
    match resolve_xml_entity(&name) {
        Some(value) => segment.push_str(value),
        None => {
            segment.push('&');
            segment.push_str(&name);
            segment.push(';');
        }
    }
    Ok(())
}

fn push_segment(out: &mut String, segment: &str) {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(trimmed);
}
