use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Find out what a directory is and where to start reading", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the files and subdirectories found under PATH
    Scan {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify PATH and show topics, key files and recommendations
    Insight {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Print the insight as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt that would be sent to the generator
    Prompt {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Classify PATH and ask the configured generator for a summary
    Summarize {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Write the summary to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Append to FILE instead of truncating it
        #[arg(long, requires = "output")]
        append: bool,
        /// Leave markdown markers unformatted
        #[arg(long)]
        no_color: bool,
    },
    /// Print configuration values
    PrintConfig,
}
