//! Extension and file-name tables shared by the extractor dispatcher,
//! the categorizer and the insight synthesizer.
//!
//! Extensions are stored lowercase and without the leading dot, matching
//! what [`crate::scanner::FileDescriptor::extension`] holds.

pub const CODE_EXTENSIONS: &[&str] = &[
    "go", "dart", "js", "jsx", "ts", "tsx", "py", "java", "rb", "rs", "c", "cc", "cpp", "h",
    "hpp", "cs", "php", "swift", "kt", "cu", "cuh",
];

pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml", "xml", "ini"];

pub const CONFIG_FILE_NAMES: &[&str] = &[".env", ".gitignore"];

/// Formats handed to the generic text extractor by exact match.
pub const STRUCTURED_TEXT_EXTENSIONS: &[&str] = &[
    "json", "yaml", "yml", "toml", "env", "xml", "csv", "cmake",
];

/// Extensions that are probably text even though no dedicated extractor
/// claims them.
pub const LIKELY_TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "yaml", "yml", "xml", "csv", "ini", "cfg", "conf", "log", "go", "py",
    "js", "ts", "java", "swift", "rb", "rs", "php", "css", "html", "htm", "c", "cpp", "h", "hpp",
    "cmake", "sh", "bash", "zsh", "sql", "kt", "cs",
];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "heic"];

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm", "flv", "wmv"];

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma"];

pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];

pub fn is_code(ext: &str) -> bool {
    CODE_EXTENSIONS.contains(&ext)
}

pub fn is_config(ext: &str, lower_name: &str) -> bool {
    CONFIG_EXTENSIONS.contains(&ext) || CONFIG_FILE_NAMES.contains(&lower_name)
}

pub fn is_image(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

pub fn is_video(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext)
}

pub fn is_audio(ext: &str) -> bool {
    AUDIO_EXTENSIONS.contains(&ext)
}

pub fn is_archive(ext: &str) -> bool {
    ARCHIVE_EXTENSIONS.contains(&ext)
}

pub fn is_probably_text(ext: &str) -> bool {
    LIKELY_TEXT_EXTENSIONS.contains(&ext)
}

/// Lowercased extension without the dot, or an empty string.
pub fn extension_of(name: &str) -> String {
    std::path::Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
