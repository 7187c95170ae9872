use crate::model::FileSummary;

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];
const LARGE_DOCUMENT_BYTES: u64 = 1_000_000;
/// Size above which any file stands in when no document candidates exist.
const FALLBACK_MIN_BYTES: u64 = 500_000;

const KEYWORD_SCORES: &[(&[&str], u32)] = &[
    (&["summary", "overview"], 50),
    (&["final", "important"], 40),
    (&["guide", "handbook"], 30),
];

/// Up to `limit` document names, best score first; equal scores keep
/// traversal order.
pub fn find_important_docs(files: &[FileSummary], limit: usize, current_year: i32) -> Vec<String> {
    let mut scored: Vec<(&FileSummary, u32)> = files
        .iter()
        .filter(|f| DOCUMENT_EXTENSIONS.contains(&f.extension.as_str()))
        .map(|f| (f, score(f, current_year)))
        .collect();

    if scored.is_empty() {
        scored = files
            .iter()
            .filter(|f| f.size > FALLBACK_MIN_BYTES)
            .map(|f| (f, 0))
            .collect();
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(f, _)| f.name.clone())
        .collect()
}

fn score(file: &FileSummary, current_year: i32) -> u32 {
    let name = file.lower_name();
    let mut score = 0;

    for (words, points) in KEYWORD_SCORES {
        if words.iter().any(|w| name.contains(w)) {
            score += points;
        }
    }

    // only the most recent matching year counts
    let recency: [(i32, u32); 3] = [
        (current_year, 30),
        (current_year - 1, 20),
        (current_year - 2, 10),
    ];
    if let Some((_, points)) = recency
        .iter()
        .find(|(year, _)| name.contains(&year.to_string()))
    {
        score += points;
    }

    if file.size > LARGE_DOCUMENT_BYTES {
        score += 10;
    }
    score
}
