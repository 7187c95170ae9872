//! Vocabularies and thresholds used by the domain classifier.
//!
//! Defaults live here as plain tables; every field can be overridden through
//! the `rules` section of the configuration file.

use serde::{Deserialize, Serialize};

pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "pubspec.yaml",
    "go.mod",
    "Cargo.toml",
    "requirements.txt",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    "composer.json",
];

pub const STUDY_KEYWORDS: &[&str] = &[
    "exam", "test", "quiz", "study", "lecture", "notes", "chapter", "assignment", "homework",
    "course", "syllabus", "practice", "review",
];

pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "tax", "invoice", "receipt", "statement", "bank", "payroll", "expense", "budget",
    "financial", "accounting",
];

pub const CREATIVE_KEYWORDS: &[&str] = &[
    "design", "mockup", "draft", "sketch", "artwork", "render", "illustration", "logo", "banner",
    "poster",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// (code + config) / total above which a directory is software.
    pub software_ratio: f64,
    /// (pdf + word + text) / total above which a directory is documents.
    pub document_ratio: f64,
    /// (image + video + audio) / total above which a directory is media.
    pub media_ratio: f64,
    /// spreadsheet / total above which a directory is financial.
    pub spreadsheet_ratio: f64,
    pub study_min_matches: usize,
    pub financial_min_matches: usize,
    pub creative_min_matches: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            software_ratio: 0.3,
            document_ratio: 0.5,
            media_ratio: 0.7,
            spreadsheet_ratio: 0.4,
            study_min_matches: 3,
            financial_min_matches: 2,
            creative_min_matches: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    pub project_markers: Vec<String>,
    pub study_keywords: Vec<String>,
    pub financial_keywords: Vec<String>,
    pub creative_keywords: Vec<String>,
    pub thresholds: Thresholds,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            project_markers: to_owned(PROJECT_MARKERS),
            study_keywords: to_owned(STUDY_KEYWORDS),
            financial_keywords: to_owned(FINANCIAL_KEYWORDS),
            creative_keywords: to_owned(CREATIVE_KEYWORDS),
            thresholds: Thresholds::default(),
        }
    }
}

impl ClassifierRules {
    pub fn is_project_marker(&self, name: &str) -> bool {
        self.project_markers
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(name))
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Number of distinct names containing at least one keyword (case-insensitive).
pub fn count_keyword_matches<'a>(
    names: impl IntoIterator<Item = &'a str>,
    keywords: &[String],
) -> usize {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    names
        .into_iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .count()
}
