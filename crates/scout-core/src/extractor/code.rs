use super::{head_lines, ContentDetails, ContentKind, ExtractError, ExtractedContent};
use std::fs;
use std::path::Path;

const PREVIEW_LINES: usize = 30;

/// Line prefixes that introduce a dependency in the languages we dispatch here.
const IMPORT_PREFIXES: &[&str] = &[
    "import ",
    "from ",
    "use ",
    "#include",
    "require ",
    "require(",
    "using ",
    "extern crate ",
];

pub(super) fn extract(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let data = fs::read(path)?;
    let content = String::from_utf8_lossy(&data);

    Ok(ExtractedContent {
        kind: ContentKind::Code,
        preview: head_lines(&content, PREVIEW_LINES),
        lines: Some(content.split('\n').count()),
        details: ContentDetails::Code {
            imports: extract_imports(&content),
        },
    })
}

fn extract_imports(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| IMPORT_PREFIXES.iter().any(|p| line.starts_with(p)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_imports_across_languages() {
        let src = "package main\n\nimport \"fmt\"\n  use std::fs;\n#include <stdio.h>\nfrom os import path\nfunc main() {}\n";
        assert_eq!(
            extract_imports(src),
            vec![
                "import \"fmt\"",
                "use std::fs;",
                "#include <stdio.h>",
                "from os import path"
            ]
        );
    }

    #[test]
    fn test_preview_capped_at_thirty_lines() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("big.py");
        let body: String = (0..100).map(|i| format!("x{} = {}\n", i, i)).collect();
        fs::write(&path, body).unwrap();

        let content = extract(&path).unwrap();
        assert_eq!(content.kind, ContentKind::Code);
        assert_eq!(content.preview.lines().count(), 30);
        // trailing newline yields an empty final segment
        assert_eq!(content.lines, Some(101));
    }
}
