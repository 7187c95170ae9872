pub mod categorize;
pub mod classify;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod filetypes;
pub mod format;
pub mod generator;
pub mod insight;
pub mod model;
pub mod progress;
pub mod rules;
pub mod scanner;

pub use categorize::{CategoryCounts, FileCategory};
pub use classify::{Classification, Domain};
pub use config::AppConfig;
pub use engine::{ScoutEngine, ScoutReport};
pub use error::Error;
pub use generator::{CommandGenerator, TextGenerator};
pub use insight::ContentInsight;
pub use model::{DirectorySummary, FileMetadata, FileSummary};
pub use progress::{ProgressReporter, SilentReporter};
pub use rules::ClassifierRules;
