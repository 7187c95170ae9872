use crate::categorize::{CategoryCounts, FileCategory};
use crate::model::FileSummary;
use crate::rules::{count_keyword_matches, ClassifierRules};
use serde::Serialize;
use std::fmt;

/// The inferred purpose of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Software,
    Documents,
    Media,
    Study,
    Financial,
    Creative,
    Mixed,
    Empty,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Software => "software",
            Domain::Documents => "documents",
            Domain::Media => "media",
            Domain::Study => "study",
            Domain::Financial => "financial",
            Domain::Creative => "creative",
            Domain::Mixed => "mixed",
            Domain::Empty => "empty",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub domain: Domain,
    pub confidence: f64,
}

const DOCUMENT_CATEGORIES: &[FileCategory] =
    &[FileCategory::Pdf, FileCategory::Word, FileCategory::Text];
const MEDIA_CATEGORIES: &[FileCategory] =
    &[FileCategory::Image, FileCategory::Video, FileCategory::Audio];
const SOFTWARE_CATEGORIES: &[FileCategory] = &[FileCategory::Code, FileCategory::Config];

pub fn classify(
    counts: &CategoryCounts,
    files: &[FileSummary],
    rules: &ClassifierRules,
) -> Classification {
    Classification {
        domain: detect_domain(counts, files, rules),
        confidence: confidence(counts),
    }
}

/// Ordered decision procedure; the first satisfied branch wins.
pub fn detect_domain(
    counts: &CategoryCounts,
    files: &[FileSummary],
    rules: &ClassifierRules,
) -> Domain {
    let total = counts.total();
    if total == 0 {
        return Domain::Empty;
    }

    let ratio = |categories: &[FileCategory]| counts.sum(categories) as f64 / total as f64;
    let t = &rules.thresholds;
    let names = || files.iter().map(|f| f.name.as_str());

    let has_marker = files.iter().any(|f| rules.is_project_marker(&f.name));
    if has_marker || ratio(SOFTWARE_CATEGORIES) > t.software_ratio {
        return Domain::Software;
    }

    if ratio(DOCUMENT_CATEGORIES) > t.document_ratio {
        if count_keyword_matches(names(), &rules.study_keywords) >= t.study_min_matches {
            return Domain::Study;
        }
        if count_keyword_matches(names(), &rules.financial_keywords) >= t.financial_min_matches {
            return Domain::Financial;
        }
        return Domain::Documents;
    }

    if ratio(MEDIA_CATEGORIES) > t.media_ratio {
        let images = counts.get(FileCategory::Image);
        let others = counts.sum(&[FileCategory::Video, FileCategory::Audio]);
        if images > others
            && count_keyword_matches(names(), &rules.creative_keywords) >= t.creative_min_matches
        {
            return Domain::Creative;
        }
        return Domain::Media;
    }

    if ratio(&[FileCategory::Spreadsheet]) > t.spreadsheet_ratio {
        return Domain::Financial;
    }

    Domain::Mixed
}

/// Share of the largest category; 0 for an empty histogram.
pub fn confidence(counts: &CategoryCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    counts.dominant() as f64 / total as f64
}
