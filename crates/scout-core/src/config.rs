use crate::rules::ClassifierRules;
use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptFormat {
    /// Llama 3 chat header tokens around system and user turns.
    #[default]
    Llama3,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Program that reads a prompt on stdin and writes the answer to stdout.
    pub command: Option<String>,
    pub args: Vec<String>,
    pub max_prompt_chars: usize,
    pub prompt_format: PromptFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            max_prompt_chars: 12_000,
            prompt_format: PromptFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ignore_patterns: Vec<String>,
    /// Extraction threads; `None` uses the rayon default, `1` is sequential.
    pub extract_workers: Option<usize>,
    pub rules: ClassifierRules,
    pub generator: GeneratorConfig,
}

/// `Scout.{toml,yaml,json}` in the working directory if present, then
/// `SCOUT__*` environment variables (`SCOUT__GENERATOR__COMMAND=ollama`).
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Scout").required(false))
        .add_source(
            Environment::with_prefix("SCOUT")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("ignore_patterns")
                .with_list_parse_key("generator.args")
                .try_parsing(true),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
