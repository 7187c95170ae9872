//! Assembly of the generation prompt: the insight and directory summary are
//! merged into a JSON payload and embedded in a per-domain instruction block.

use crate::categorize::CategoryCounts;
use crate::classify::Domain;
use crate::config::PromptFormat;
use crate::error::Error;
use crate::format::human_size;
use crate::insight::ContentInsight;
use crate::model::{DirectorySummary, FileMetadata};
use serde::Serialize;

pub const MAX_CONTEXT_KEY_FILES: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct KeyFileContext {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub domain: Domain,
    pub confidence: String,
    pub total_files: usize,
    pub categories: CategoryCounts,
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub key_files: Vec<KeyFileContext>,
}

/// Pure assembly, no classification. Key files that are not actual file
/// names (placeholder hints) are carried by name only.
pub fn build_context(insight: &ContentInsight, summary: &DirectorySummary) -> PromptContext {
    let key_files = insight
        .key_files
        .iter()
        .take(MAX_CONTEXT_KEY_FILES)
        .map(|name| match summary.files.iter().find(|f| &f.name == name) {
            Some(file) => KeyFileContext {
                name: file.name.clone(),
                extension: Some(file.extension.clone()),
                size: Some(human_size(file.size)),
                metadata: file.metadata.clone(),
            },
            None => KeyFileContext {
                name: name.clone(),
                extension: None,
                size: None,
                metadata: None,
            },
        })
        .collect();

    PromptContext {
        domain: insight.domain,
        confidence: format!("{:.0}%", insight.confidence * 100.0),
        total_files: summary.files.len(),
        categories: insight.files_by_category.clone(),
        topics: insight.topics.clone(),
        date_range: insight.date_range.clone(),
        key_files,
    }
}

const INSTRUCTIONS: &[&str] = &[
    "Use the exact file names from key_files",
    "Include paths where they help",
    "Follow the answer format exactly",
    "Suggest concrete next steps",
    "For software, point out entry points and key modules",
    "For study material, suggest an order to work through it",
    "For documents and financial records, say why each file matters",
];

const ANSWER_FORMAT: &str = "Answer in exactly this format:
### What's here
One sentence on what the folder holds.
### What to do
One sentence on how to use it.
### Start here
- **<file name>**: why to open it first
- **<file name>**: what comes next
- **<file name or tip>**: one more pointer";

fn persona(domain: Domain) -> &'static str {
    match domain {
        Domain::Study => {
            "You are Scout, an upbeat study partner. This folder holds study or exam \
             preparation material. Help the reader see which subjects are covered and \
             how to work through them. Stay encouraging and keep it under 100 words."
        }
        Domain::Software => {
            "You are Scout, a friendly senior engineer. This folder is a code project. \
             Explain what it does, its tech stack, the key modules and where to start \
             reading. Keep it under 100 words."
        }
        Domain::Media => {
            "You are Scout, a relaxed media buddy. This folder holds photos, videos or \
             music. Keep it casual, encourage browsing and light organizing, and stay \
             under 75 words."
        }
        Domain::Documents => {
            "You are Scout, a sharp executive assistant. This folder holds documents. \
             Explain what they cover, how to navigate them and what to read first. \
             Keep it under 100 words."
        }
        Domain::Financial => {
            "You are Scout, a careful financial guide. This folder holds financial \
             records. Explain what is there, suggest an order to review it and remind \
             the reader to keep backups. Keep it under 100 words."
        }
        Domain::Creative | Domain::Mixed | Domain::Empty => {
            "You are Scout, a friendly organizer. Summarize what is in this folder and \
             suggest practical next steps. Keep it under 100 words."
        }
    }
}

pub fn system_prompt(domain: Domain) -> String {
    format!("{}\n\n{}", persona(domain), ANSWER_FORMAT)
}

pub fn user_prompt(context: &PromptContext) -> Result<String, Error> {
    let json = serde_json::to_string_pretty(context)?;
    let instructions: Vec<String> = INSTRUCTIONS.iter().map(|i| format!("- {}", i)).collect();
    Ok(format!(
        "Directory data:\n{}\n\nInstructions:\n{}",
        json,
        instructions.join("\n")
    ))
}

/// The exact text handed to the generation backend.
pub fn render_prompt(
    insight: &ContentInsight,
    summary: &DirectorySummary,
    format: PromptFormat,
) -> Result<String, Error> {
    let context = build_context(insight, summary);
    let system = system_prompt(insight.domain);
    let user = user_prompt(&context)?;

    Ok(match format {
        PromptFormat::Llama3 => format!(
            "<|begin_of_text|><|start_header_id|>system<|end_header_id|>\n\n{}<|eot_id|>\
             <|start_header_id|>user<|end_header_id|>\n\n{}<|eot_id|>\
             <|start_header_id|>assistant<|end_header_id|>\n\n",
            system, user
        ),
        PromptFormat::Plain => format!("{}\n\n{}\n", system, user),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ContentDetails;
    use crate::filetypes::extension_of;
    use crate::insight::analyze_directory_at;
    use crate::model::FileSummary;
    use crate::rules::ClassifierRules;
    use std::path::PathBuf;

    fn summary(files: Vec<FileSummary>) -> DirectorySummary {
        DirectorySummary {
            directory: PathBuf::from("/data/project"),
            file_count: files.len(),
            subdirectories: Vec::new(),
            files,
        }
    }

    fn file(name: &str, size: u64) -> FileSummary {
        FileSummary::unextracted(name, extension_of(name), size)
    }

    #[test]
    fn test_context_carries_key_file_metadata() {
        let mut main = file("main.go", 2048);
        main.metadata = Some(FileMetadata {
            preview: "package main".to_string(),
            lines: Some(1),
            details: ContentDetails::Code {
                imports: vec!["import \"fmt\"".to_string()],
            },
        });
        let s = summary(vec![main, file("go.mod", 10), file("util.go", 10)]);
        let insight = analyze_directory_at(&s, &ClassifierRules::default(), 2025);
        let context = build_context(&insight, &s);

        assert_eq!(context.domain, Domain::Software);
        assert_eq!(context.confidence, "67%");
        assert_eq!(context.total_files, 3);
        assert_eq!(context.key_files.len(), 1);
        let key = &context.key_files[0];
        assert_eq!(key.name, "main.go");
        assert_eq!(key.size.as_deref(), Some("2.0 KB"));
        assert_eq!(key.metadata.as_ref().unwrap().preview, "package main");

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["categories"]["code"], 2);
        assert_eq!(json["key_files"][0]["metadata"]["details"]["format"], "code");
    }

    #[test]
    fn test_placeholder_key_file_is_name_only() {
        let s = summary(vec![file("lib.rs", 1), file("Cargo.toml", 1)]);
        let insight = analyze_directory_at(&s, &ClassifierRules::default(), 2025);
        let context = build_context(&insight, &s);
        let json = serde_json::to_value(&context.key_files[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Look in the src/ or lib/ directory" }));
    }

    #[test]
    fn test_llama3_wrapping() {
        let s = summary(vec![file("a.jpg", 1), file("b.jpg", 1)]);
        let insight = analyze_directory_at(&s, &ClassifierRules::default(), 2025);
        let prompt = render_prompt(&insight, &s, PromptFormat::Llama3).unwrap();

        assert!(prompt.starts_with("<|begin_of_text|><|start_header_id|>system"));
        assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n\n"));
        assert!(prompt.contains("media buddy"));
        assert!(prompt.contains("\"total_files\": 2"));
    }

    #[test]
    fn test_plain_format_has_no_tokens() {
        let s = summary(vec![file("notes.txt", 1)]);
        let insight = analyze_directory_at(&s, &ClassifierRules::default(), 2025);
        let prompt = render_prompt(&insight, &s, PromptFormat::Plain).unwrap();
        assert!(!prompt.contains("<|"));
        assert!(prompt.contains("Instructions:\n- Use the exact file names"));
    }
}
