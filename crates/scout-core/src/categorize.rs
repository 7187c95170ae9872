use crate::filetypes;
use crate::model::FileSummary;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Code,
    Config,
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    Text,
    Image,
    Video,
    Audio,
    Archive,
    Other,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Code => "code",
            FileCategory::Config => "config",
            FileCategory::Pdf => "pdf",
            FileCategory::Word => "word",
            FileCategory::Spreadsheet => "spreadsheet",
            FileCategory::Presentation => "presentation",
            FileCategory::Text => "text",
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Archive => "archive",
            FileCategory::Other => "other",
        }
    }

    /// First matching rule wins; every file lands in exactly one category.
    pub fn of(extension: &str, name: &str) -> FileCategory {
        let ext = extension.to_ascii_lowercase();
        let ext = ext.as_str();
        let name = name.to_lowercase();

        match ext {
            _ if filetypes::is_code(ext) => FileCategory::Code,
            _ if filetypes::is_config(ext, &name) => FileCategory::Config,
            "pdf" => FileCategory::Pdf,
            "docx" | "doc" => FileCategory::Word,
            "xlsx" | "xls" | "csv" => FileCategory::Spreadsheet,
            "pptx" | "ppt" => FileCategory::Presentation,
            "txt" | "md" => FileCategory::Text,
            _ if filetypes::is_image(ext) => FileCategory::Image,
            _ if filetypes::is_video(ext) => FileCategory::Video,
            _ if filetypes::is_audio(ext) => FileCategory::Audio,
            _ if filetypes::is_archive(ext) => FileCategory::Archive,
            _ => FileCategory::Other,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category histogram. Categories with no files are absent, not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<FileCategory, usize>);

impl CategoryCounts {
    pub fn get(&self, category: FileCategory) -> usize {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn sum(&self, categories: &[FileCategory]) -> usize {
        categories.iter().map(|c| self.get(*c)).sum()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn dominant(&self) -> usize {
        self.0.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn increment(&mut self, category: FileCategory) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (FileCategory, usize)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }
}

impl FromIterator<(FileCategory, usize)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (FileCategory, usize)>>(iter: I) -> Self {
        let mut counts = CategoryCounts::default();
        for (category, n) in iter {
            if n > 0 {
                *counts.0.entry(category).or_insert(0) += n;
            }
        }
        counts
    }
}

pub fn categorize_files(files: &[FileSummary]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for file in files {
        counts.increment(FileCategory::of(&file.extension, &file.name));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileSummary {
        FileSummary::unextracted(name, filetypes::extension_of(name), 10)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(FileCategory::of("json", "package.json"), FileCategory::Config);
        assert_eq!(FileCategory::of("rs", "lib.rs"), FileCategory::Code);
        assert_eq!(FileCategory::of("csv", "q1.csv"), FileCategory::Spreadsheet);
        assert_eq!(FileCategory::of("md", "README.md"), FileCategory::Text);
        assert_eq!(FileCategory::of("heic", "IMG_1.HEIC"), FileCategory::Image);
        assert_eq!(FileCategory::of("gz", "backup.tar.gz"), FileCategory::Archive);
        assert_eq!(FileCategory::of("", ".gitignore"), FileCategory::Config);
        assert_eq!(FileCategory::of("exe", "setup.exe"), FileCategory::Other);
    }

    #[test]
    fn test_histogram_sums_to_file_count() {
        let files: Vec<FileSummary> = [
            "main.go", "go.mod", "a.md", "b.png", "c.mp3", "d.bin", "e.zip", "f.pptx",
        ]
        .iter()
        .map(|n| file(n))
        .collect();

        let counts = categorize_files(&files);
        assert_eq!(counts.total(), files.len());
        assert_eq!(counts.get(FileCategory::Code), 1);
        assert_eq!(counts.get(FileCategory::Other), 2);
        assert_eq!(counts.get(FileCategory::Word), 0);
    }

    #[test]
    fn test_serializes_as_string_keys() {
        let counts: CategoryCounts = [(FileCategory::Pdf, 3), (FileCategory::Image, 0)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"pdf":3}"#);
    }
}
