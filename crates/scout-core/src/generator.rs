//! Boundary to the external text-generation backend.

use crate::config::GeneratorConfig;
use crate::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

pub const TRUNCATION_MARKER: &str = "\n...[truncated due to size]...";

/// Turns a rendered prompt into free text. Failures are terminal for the
/// invocation; implementations do not retry.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, Error>;
}

/// Cuts `prompt` to `max_chars` characters and appends the truncation marker.
pub fn truncate_prompt(prompt: &str, max_chars: usize) -> String {
    if prompt.chars().count() <= max_chars {
        return prompt.to_string();
    }
    let mut cut: String = prompt.chars().take(max_chars).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

/// Runs a local program (llama.cpp, ollama, ...) with the prompt on stdin and
/// returns its stdout.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    max_prompt_chars: usize,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>, max_prompt_chars: usize) -> Self {
        Self {
            program: program.into(),
            args,
            max_prompt_chars,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, Error> {
        let program = config.command.as_deref().ok_or_else(|| Error::Generation {
            message: "no generator command configured (set generator.command)".to_string(),
        })?;
        Ok(Self::new(
            program,
            config.args.clone(),
            config.max_prompt_chars,
        ))
    }
}

impl TextGenerator for CommandGenerator {
    fn generate(&self, prompt: &str) -> Result<String, Error> {
        let prompt = if prompt.chars().count() > self.max_prompt_chars {
            warn!(
                "Prompt exceeds {} characters, truncating",
                self.max_prompt_chars
            );
            truncate_prompt(prompt, self.max_prompt_chars)
        } else {
            prompt.to_string()
        };

        debug!("Running generator: {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Generation {
                message: format!("Failed to spawn {}: {}", self.program, e),
            })?;

        // stdin is written while wait_with_output drains stdout
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });

        let output = child.wait_with_output().map_err(|e| Error::Generation {
            message: format!("Execution failed: {}", e),
        })?;

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Err(e)) => debug!("Generator closed stdin early: {}", e),
                Err(_) => warn!("Prompt writer thread panicked"),
                Ok(Ok(())) => {}
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Generation {
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(Error::Generation {
                message: format!("{} returned no output", self.program),
            });
        }
        Ok(text)
    }
}
