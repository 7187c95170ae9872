mod commands;
mod logging;
mod progress;
mod render;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use progress::CliReporter;
use scout_core::config::AppConfig;
use scout_core::{CommandGenerator, ScoutEngine, ScoutReport, SilentReporter};
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match scout_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    let result = match args.command {
        Some(Commands::Scan { path, json }) => run_scan(&config, &path, json),
        Some(Commands::Insight { path, json }) => run_insight(&config, &path, json),
        Some(Commands::Prompt { path }) => run_prompt(&config, &path),
        Some(Commands::Summarize {
            path,
            output,
            append,
            no_color,
        }) => run_summarize(&config, &path, output.as_deref(), append, no_color),
        Some(Commands::PrintConfig) => print_config(&config),
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run_scan(config: &AppConfig, path: &Path, json: bool) -> anyhow::Result<()> {
    let scan =
        scout_core::scanner::scan_directory(path, &config.ignore_patterns, &SilentReporter)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&scan)?);
    } else {
        print!("{}", scan.pretty());
    }
    Ok(())
}

fn analyze(config: &AppConfig, path: &Path) -> anyhow::Result<ScoutReport> {
    let engine = ScoutEngine::new(config.clone());
    let reporter = CliReporter::new();
    let report = engine.run(path, &reporter)?;
    info!("{}", render::headline(&report.summary, &report.insight));
    Ok(report)
}

fn run_insight(config: &AppConfig, path: &Path, json: bool) -> anyhow::Result<()> {
    let report = analyze(config, path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.insight)?);
    } else {
        print!("{}", render::describe_insight(&report.summary, &report.insight));
    }
    Ok(())
}

fn run_prompt(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    let report = analyze(config, path)?;
    println!("{}", report.prompt(config.generator.prompt_format)?);
    Ok(())
}

fn run_summarize(
    config: &AppConfig,
    path: &Path,
    output: Option<&Path>,
    append: bool,
    no_color: bool,
) -> anyhow::Result<()> {
    let generator = CommandGenerator::from_config(&config.generator)?;

    let mut writer: Box<dyn Write> = match output {
        Some(file) => {
            let handle = OpenOptions::new()
                .create(true)
                .write(true)
                .append(append)
                .truncate(!append)
                .open(file)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            println!("Saving output to {}...", file.display());
            Box::new(handle)
        }
        None => Box::new(io::stdout()),
    };
    let color = output.is_none() && !no_color;

    println!("{} {}", "Scouting:".cyan().bold(), path.display());
    let report = analyze(config, path)?;
    writeln!(
        writer,
        "{}",
        render::headline(&report.summary, &report.insight)
    )?;

    println!("Generating summary...");
    let response = report
        .summarize(&generator, config.generator.prompt_format)
        .context("Summarizer error")?;

    writeln!(writer, "\n{}", render::rule())?;
    writeln!(writer, "{}", render::format_for_terminal(&response, color))?;
    writeln!(writer, "{}", render::rule())?;
    writer.flush()?;

    if output.is_some() {
        println!("{}", "Done.".green());
    }
    Ok(())
}

fn print_config(config: &AppConfig) -> anyhow::Result<()> {
    println!("Configuration: {}", serde_json::to_string_pretty(config)?);
    Ok(())
}
