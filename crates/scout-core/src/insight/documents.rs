use super::ranking::find_important_docs;
use super::ContentInsight;
use crate::classify::Domain;
use crate::model::FileSummary;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// Below this many priority-named documents, the scored ranking tops up the list.
const MIN_KEY_FILES: usize = 3;
const MAX_KEY_FILES: usize = 5;

const PRIORITY_KEYWORDS: &[&str] = &[
    "summary",
    "overview",
    "final",
    "important",
    "guide",
    "index",
    "table",
    "contents",
    "readme",
    "start",
    "intro",
    "introduction",
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "of", "a", "an", "in", "on", "at", "to", "for", "with",
];

lazy_static! {
    // Only digits disqualify a neighbour, so `_2023_` matches where `\b2023\b`
    // would not (underscore is a word character).
    static ref YEAR_RE: Regex =
        Regex::new(r"(?:^|[^0-9])((?:19|20)[0-9]{2})(?:[^0-9]|$)").unwrap();
    static ref SEPARATOR_RE: Regex = Regex::new(r"[_\-.]").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\b[0-9]+\b").unwrap();
}

/// First 19xx/20xx year standing on its own in `filename`.
pub fn extract_year(filename: &str) -> Option<String> {
    YEAR_RE
        .captures(filename)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Meaningful words of a file name: no extension, separators, bare numbers,
/// stop words or words of three characters or fewer.
pub fn extract_topics_from_filename(filename: &str) -> Vec<String> {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let spaced = SEPARATOR_RE.replace_all(&stem, " ");
    let without_numbers = NUMBER_RE.replace_all(&spaced, "");

    without_numbers
        .split_whitespace()
        .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Recent years are those from two years back up to `current_year`.
pub fn should_prioritize_doc(filename: &str, current_year: i32) -> bool {
    let lower = filename.to_lowercase();
    PRIORITY_KEYWORDS.iter().any(|k| lower.contains(k))
        || (current_year - 2..=current_year).any(|y| lower.contains(&y.to_string()))
}

pub(super) fn extract_document_insights(
    insight: &mut ContentInsight,
    files: &[FileSummary],
    current_year: i32,
) {
    let mut topic_counts: Vec<(String, usize)> = Vec::new();
    let mut years = BTreeSet::new();

    for file in files {
        if file.extension != "pdf" && file.extension != "docx" {
            continue;
        }

        if let Some(year) = extract_year(&file.name) {
            years.insert(year);
        }

        for topic in extract_topics_from_filename(&file.name) {
            match topic_counts.iter_mut().find(|(t, _)| *t == topic) {
                Some((_, n)) => *n += 1,
                None => topic_counts.push((topic, 1)),
            }
        }

        if should_prioritize_doc(&file.name, current_year)
            && !insight.key_files.contains(&file.name)
        {
            insight.key_files.push(file.name.clone());
        }
    }

    // most frequent first, first-seen order on ties
    topic_counts.sort_by(|a, b| b.1.cmp(&a.1));
    insight.topics = topic_counts.into_iter().map(|(t, _)| t).collect();

    insight.date_range = match (years.first(), years.last()) {
        (Some(min), Some(max)) if min == max => Some(min.clone()),
        (Some(min), Some(max)) => Some(format!("{}-{}", min, max)),
        _ => None,
    };

    if insight.key_files.len() < MIN_KEY_FILES {
        for name in find_important_docs(files, MAX_KEY_FILES, current_year) {
            if insight.key_files.len() >= MIN_KEY_FILES {
                break;
            }
            if !insight.key_files.contains(&name) {
                insight.key_files.push(name);
            }
        }
    }
    insight.key_files.truncate(MAX_KEY_FILES);

    if insight.domain == Domain::Study {
        insight.recommend(&[
            "Start with overviews and syllabi before diving into chapters",
            "Work through practice material after each lecture",
            "Keep notes next to the material they cover",
        ]);
    } else {
        insight.recommend(&[
            "Start with the most recent documents",
            "Look for summary or overview files first",
            "Organize by topic or date if needed",
        ]);
    }
}
