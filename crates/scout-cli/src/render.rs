use colored::*;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use scout_core::format::human_size;
use scout_core::{ContentInsight, DirectorySummary};
use std::fmt::Write as _;

pub const RULE_WIDTH: usize = 80;

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(r"(?m)^###\s*(.*)$").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
}

/// `### heading` lines become bold cyan and `**span**` becomes bold. Without
/// color the text is returned untouched.
pub fn format_for_terminal(text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let text = HEADER_RE.replace_all(text, |caps: &Captures| {
        caps[1].cyan().bold().to_string()
    });
    BOLD_RE
        .replace_all(&text, |caps: &Captures| caps[1].bold().to_string())
        .into_owned()
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// One-line result headline shown before any generated text.
pub fn headline(summary: &DirectorySummary, insight: &ContentInsight) -> String {
    format!(
        "Found {} files ({:.0}% confidence: {} domain)",
        summary.file_count,
        insight.confidence * 100.0,
        insight.domain
    )
}

/// Human-readable view of an insight for the `insight` command.
pub fn describe_insight(summary: &DirectorySummary, insight: &ContentInsight) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", headline(summary, insight).bold());

    let total_bytes: u64 = summary.files.iter().map(|f| f.size).sum();
    let _ = writeln!(
        out,
        "{} in {} subdirectories",
        human_size(total_bytes),
        summary.subdirectories.len()
    );

    if !insight.files_by_category.is_empty() {
        let _ = writeln!(out, "\n{}", "Categories".cyan().bold());
        for (category, count) in insight.files_by_category.iter() {
            let _ = writeln!(out, "  {:<14}{}", category.as_str(), count);
        }
    }

    if !insight.topics.is_empty() {
        let _ = writeln!(out, "\n{} {}", "Topics:".cyan().bold(), insight.topics.join(", "));
    }
    if let Some(range) = &insight.date_range {
        let _ = writeln!(out, "{} {}", "Dates:".cyan().bold(), range);
    }

    if !insight.key_files.is_empty() {
        let _ = writeln!(out, "\n{}", "Start here".cyan().bold());
        for name in &insight.key_files {
            let _ = writeln!(out, "  - {}", name.green());
        }
    }

    if !insight.recommendations.is_empty() {
        let _ = writeln!(out, "\n{}", "Recommendations".cyan().bold());
        for tip in &insight.recommendations {
            let _ = writeln!(out, "  - {}", tip);
        }
    }
    out
}
