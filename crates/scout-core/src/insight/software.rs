use super::ContentInsight;
use crate::model::FileSummary;

/// Marker file name (lowercase) → stack label.
const STACK_MARKERS: &[(&str, &str)] = &[
    ("pubspec.yaml", "Flutter"),
    ("package.json", "Node.js/JavaScript"),
    ("go.mod", "Go"),
    ("requirements.txt", "Python"),
    ("pipfile", "Python"),
    ("cargo.toml", "Rust"),
    ("pom.xml", "Java"),
    ("build.gradle", "Java"),
    ("cmakelists.txt", "C/C++"),
    ("makefile", "C/C++"),
];

const STACK_EXTENSIONS: &[(&[&str], &str)] = &[
    (&["c", "cc", "cpp", "h", "hpp"], "C/C++"),
    (&["cu", "cuh"], "CUDA"),
];

const ENTRY_POINTS: &[&str] = &[
    "main.dart",
    "main.go",
    "index.js",
    "index.html",
    "app.py",
    "main.py",
];

pub const NO_ENTRY_POINT_HINT: &str = "Look in the src/ or lib/ directory";

/// Stack labels in first-detected order, each once.
pub(super) fn detect_tech_stack(files: &[FileSummary]) -> Vec<String> {
    let mut stacks: Vec<String> = Vec::new();
    let mut add = |label: &str| {
        if !stacks.iter().any(|s| s == label) {
            stacks.push(label.to_string());
        }
    };

    for file in files {
        let name = file.lower_name();
        for (marker, label) in STACK_MARKERS {
            if name == *marker {
                add(*label);
            }
        }
        for (exts, label) in STACK_EXTENSIONS {
            if exts.contains(&file.extension.as_str()) {
                add(*label);
            }
        }
    }
    stacks
}

pub(super) fn extract_software_insights(insight: &mut ContentInsight, files: &[FileSummary]) {
    insight.topics = detect_tech_stack(files);

    for file in files {
        let name = file.lower_name();
        if ENTRY_POINTS.contains(&name.as_str()) && !insight.key_files.contains(&file.name) {
            insight.key_files.push(file.name.clone());
        }
    }

    if let Some(readme) = files.iter().find(|f| f.lower_name() == "readme.md") {
        insight.key_files.insert(0, readme.name.clone());
    }

    if insight.key_files.is_empty() {
        insight.key_files.push(NO_ENTRY_POINT_HINT.to_string());
    }

    insight.recommend(&[
        "Read README.md first if available",
        "Check the main entry point to understand flow",
        "Review package/dependency files for tech stack",
    ]);
}
