//! Domain-specific insight synthesis: topics, key files, date ranges and
//! recommendations for a classified directory.

mod documents;
mod ranking;
mod software;

pub use documents::{extract_topics_from_filename, extract_year, should_prioritize_doc};
pub use ranking::find_important_docs;

use crate::categorize::{categorize_files, CategoryCounts};
use crate::classify::{classify, Domain};
use crate::filetypes;
use crate::model::{DirectorySummary, FileSummary};
use crate::rules::ClassifierRules;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentInsight {
    pub domain: Domain,
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub key_files: Vec<String>,
    pub files_by_category: CategoryCounts,
    pub recommendations: Vec<String>,
    pub confidence: f64,
}

impl ContentInsight {
    fn new(files_by_category: CategoryCounts, domain: Domain, confidence: f64) -> Self {
        Self {
            domain,
            topics: Vec::new(),
            date_range: None,
            key_files: Vec::new(),
            files_by_category,
            recommendations: Vec::new(),
            confidence,
        }
    }

    fn recommend(&mut self, items: &[&str]) {
        self.recommendations = items.iter().map(|s| s.to_string()).collect();
    }

    fn set_topics(&mut self, items: &[&str]) {
        self.topics = items.iter().map(|s| s.to_string()).collect();
    }
}

/// Categorize, classify and synthesize using the current calendar year for
/// recency scoring.
pub fn analyze_directory(summary: &DirectorySummary, rules: &ClassifierRules) -> ContentInsight {
    analyze_directory_at(summary, rules, chrono::Local::now().year())
}

pub fn analyze_directory_at(
    summary: &DirectorySummary,
    rules: &ClassifierRules,
    current_year: i32,
) -> ContentInsight {
    let counts = categorize_files(&summary.files);
    let classification = classify(&counts, &summary.files, rules);
    debug!(
        "Classified {} as {} ({:.0}% concentration)",
        summary.directory.display(),
        classification.domain,
        classification.confidence * 100.0
    );

    let mut insight =
        ContentInsight::new(counts, classification.domain, classification.confidence);
    let files = &summary.files;

    match classification.domain {
        Domain::Software => software::extract_software_insights(&mut insight, files),
        Domain::Documents | Domain::Study => {
            documents::extract_document_insights(&mut insight, files, current_year)
        }
        Domain::Media => extract_media_insights(&mut insight, files),
        Domain::Financial => extract_financial_insights(&mut insight, files),
        Domain::Creative => extract_creative_insights(&mut insight),
        Domain::Mixed => extract_mixed_insights(&mut insight, files),
        Domain::Empty => insight.recommend(&["Nothing to explore here yet"]),
    }

    insight
}

fn extract_media_insights(insight: &mut ContentInsight, files: &[FileSummary]) {
    let (mut images, mut videos, mut audio) = (0usize, 0usize, 0usize);
    for file in files {
        let ext = file.extension.as_str();
        if filetypes::is_image(ext) {
            images += 1;
        } else if filetypes::is_video(ext) {
            videos += 1;
        } else if filetypes::is_audio(ext) {
            audio += 1;
        }
    }

    if images + videos + audio == 0 {
        return;
    }

    // largest group wins; images, then videos, on ties
    if images >= videos && images >= audio {
        insight.set_topics(&["photos", "images"]);
        insight.recommend(&["Browse through and enjoy the memories"]);
    } else if videos >= audio {
        insight.set_topics(&["videos"]);
        insight.recommend(&["Grab some popcorn and enjoy"]);
    } else {
        insight.set_topics(&["music", "audio"]);
        insight.recommend(&["Put on your headphones and listen"]);
    }
}

/// Keyword families: each family is reported at most once.
const FINANCIAL_FAMILIES: &[(&str, &[&str])] = &[
    ("taxes", &["tax", "assessment"]),
    ("invoices/receipts", &["invoice", "receipt"]),
    ("bank statements", &["statement", "bank"]),
    ("payroll", &["payroll", "salary"]),
];

fn extract_financial_insights(insight: &mut ContentInsight, files: &[FileSummary]) {
    let mut found = BTreeSet::new();
    for file in files {
        let name = file.lower_name();
        for (index, (_, words)) in FINANCIAL_FAMILIES.iter().enumerate() {
            if words.iter().any(|w| name.contains(w)) {
                found.insert(index);
            }
        }
    }

    insight.topics = found
        .into_iter()
        .map(|i| FINANCIAL_FAMILIES[i].0.to_string())
        .collect();
    insight.recommend(&[
        "Organize by year and category",
        "Keep tax documents separate and secure",
        "Back up important financial records",
    ]);
}

fn extract_creative_insights(insight: &mut ContentInsight) {
    insight.set_topics(&["creative work", "design assets"]);
    insight.recommend(&[
        "Browse through for inspiration",
        "Consider organizing by project or date",
        "Keep high-res originals backed up",
    ]);
}

const MIXED_KEY_FILES: usize = 3;

fn extract_mixed_insights(insight: &mut ContentInsight, files: &[FileSummary]) {
    let mut by_size: Vec<&FileSummary> = files.iter().collect();
    // stable: equal sizes keep traversal order
    by_size.sort_by(|a, b| b.size.cmp(&a.size));
    insight.key_files = by_size
        .into_iter()
        .take(MIXED_KEY_FILES)
        .map(|f| f.name.clone())
        .collect();

    insight.set_topics(&["various files"]);
    insight.recommend(&[
        "This looks like a mixed collection",
        "Consider organizing by file type or purpose",
        "Check the largest files first",
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filetypes::extension_of;
    use std::path::PathBuf;

    fn summary(files: &[(&str, u64)]) -> DirectorySummary {
        let files: Vec<FileSummary> = files
            .iter()
            .map(|(n, size)| FileSummary::unextracted(*n, extension_of(n), *size))
            .collect();
        DirectorySummary {
            directory: PathBuf::from("/tmp/x"),
            file_count: files.len(),
            subdirectories: Vec::new(),
            files,
        }
    }

    fn analyze(files: &[(&str, u64)]) -> ContentInsight {
        analyze_directory_at(&summary(files), &ClassifierRules::default(), 2025)
    }

    #[test]
    fn test_mixed_key_files_are_three_largest() {
        let insight = analyze(&[
            ("a.zip", 500),
            ("b.exe", 9000),
            ("c.log", 10),
            ("d.bak", 700),
            ("e.dat", 700),
        ]);
        assert_eq!(insight.domain, Domain::Mixed);
        assert_eq!(insight.key_files, vec!["b.exe", "d.bak", "e.dat"]);
        assert_eq!(insight.topics, vec!["various files"]);
    }

    #[test]
    fn test_media_video_majority() {
        let mut insight = ContentInsight::new(CategoryCounts::default(), Domain::Media, 1.0);
        let s = summary(&[("a.mp4", 1), ("b.mp4", 1), ("c.jpg", 1), ("d.mp3", 1)]);
        extract_media_insights(&mut insight, &s.files);
        assert_eq!(insight.topics, vec!["videos"]);
    }

    #[test]
    fn test_media_images_largest_group() {
        let mut insight = ContentInsight::new(CategoryCounts::default(), Domain::Media, 1.0);
        let s = summary(&[
            ("a.jpg", 1),
            ("b.jpg", 1),
            ("c.jpg", 1),
            ("d.mp4", 1),
            ("e.mp4", 1),
            ("f.mp3", 1),
            ("g.mp3", 1),
        ]);
        extract_media_insights(&mut insight, &s.files);
        assert_eq!(insight.topics, vec!["photos", "images"]);
    }

    #[test]
    fn test_media_audio_largest_group() {
        let mut insight = ContentInsight::new(CategoryCounts::default(), Domain::Media, 1.0);
        let s = summary(&[("a.mp3", 1), ("b.flac", 1), ("c.mp4", 1)]);
        extract_media_insights(&mut insight, &s.files);
        assert_eq!(insight.topics, vec!["music", "audio"]);
    }

    #[test]
    fn test_media_image_wins_tie() {
        let mut insight = ContentInsight::new(CategoryCounts::default(), Domain::Media, 1.0);
        let s = summary(&[("a.mp4", 1), ("b.jpg", 1)]);
        extract_media_insights(&mut insight, &s.files);
        assert_eq!(insight.topics, vec!["photos", "images"]);
    }

    #[test]
    fn test_financial_families_reported_once() {
        let insight = analyze(&[
            ("tax_return.pdf", 1),
            ("tax_assessment.pdf", 1),
            ("bank_statement_march.pdf", 1),
            ("contract.pdf", 1),
        ]);
        assert_eq!(insight.domain, Domain::Financial);
        assert_eq!(insight.topics, vec!["taxes", "bank statements"]);
    }

    #[test]
    fn test_empty_directory() {
        let insight = analyze(&[]);
        assert_eq!(insight.domain, Domain::Empty);
        assert!(insight.key_files.is_empty());
        assert!(insight.files_by_category.is_empty());
        assert_eq!(insight.confidence, 0.0);
    }

    #[test]
    fn test_creative_static_topics() {
        let insight = analyze(&[
            ("logo_v1.png", 1),
            ("logo_v2.png", 1),
            ("banner.png", 1),
            ("holiday.jpg", 1),
        ]);
        assert_eq!(insight.domain, Domain::Creative);
        assert_eq!(insight.topics, vec!["creative work", "design assets"]);
    }
}
