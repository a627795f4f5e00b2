//! Summarization Model Benchmark Tool
//!
//! A CLI tool for measuring wall-clock latency, peak memory, and output of
//! pre-trained text-summarization models against a fixed input document.
//!
//! ## Features
//!
//! - Sequential, per-model measurement with independent memory baselines
//! - Works against any endpoint speaking the Hugging Face inference protocol
//! - Built-in input documents for reproducible comparisons
//! - Multiple report formats (Text, JSON, Markdown, CSV)
//! - Per-model failures are recorded, not fatal (opt into --fail-fast)
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark the default model list against the built-in article
//! sumbench run
//!
//! # Benchmark specific models against a custom document
//! sumbench run --models google/pegasus-xsum,facebook/bart-large-cnn --input notes.txt
//!
//! # Use a named model set and render markdown
//! sumbench run --set fast --format markdown
//!
//! # List models and documents
//! sumbench list --detailed --documents
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

mod bench;
mod cli;
mod config;
mod corpus;
mod engine;
mod error;
mod models;
mod monitor;
mod utils;

use bench::{BenchmarkRunner, ReportFormat, ReportRenderer};
use cli::Args;
use config::{ConfigFile, EnvConfig, ModelSet};
use engine::HttpEngineProvider;
use models::{Device, SummarizationRequest};
use monitor::ProcStatusMonitor;
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    let level = if args.verbose || env.verbose.unwrap_or(false) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    init_logger(level);

    match args.command {
        cli::Command::Run(run_args) => {
            run_benchmark(run_args, env).await?;
        }
        cli::Command::List(list_args) => {
            list_catalog(list_args);
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

async fn run_benchmark(args: cli::RunArgs, env: EnvConfig) -> Result<()> {
    if env.has_any() {
        debug!("environment overrides active");
    }

    let file = match env.config_file.as_deref() {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    // Precedence: CLI > environment > config file > defaults
    let models = resolve_models(&args, &env, &file)?;
    let endpoint = args
        .endpoint
        .or(env.endpoint)
        .unwrap_or_else(|| file.app.endpoint.clone());
    let token = args.token.or(env.token).or_else(|| file.app.api_token.clone());
    let timeout_secs = args.timeout.or(env.timeout).unwrap_or(file.app.timeout_secs);

    let device_str = args
        .device
        .or(env.device)
        .unwrap_or_else(|| file.app.device.clone());
    let device = Device::from_str(&device_str)
        .ok_or_else(|| anyhow::anyhow!("Unknown device: {device_str}"))?;

    let format_str = args
        .format
        .or(env.format)
        .unwrap_or_else(|| file.app.format.clone());
    let format = ReportFormat::from_str(&format_str)
        .ok_or_else(|| anyhow::anyhow!("Unknown report format: {format_str}"))?;

    let (source, text) = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {path}"))?;
            (path.clone(), text)
        }
        None => {
            let doc = corpus::find(&args.doc).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown document: {}. See `sumbench list --documents`",
                    args.doc
                )
            })?;
            (doc.name.to_string(), doc.text.to_string())
        }
    };

    let request = SummarizationRequest::new(text)
        .with_lengths(args.min_length, args.max_length)
        .with_batch_size(args.batch_size);

    info!(
        "Benchmarking {} model(s) against '{}' ({} chars) at {} [device: {}]",
        models.len(),
        source,
        request.text.chars().count(),
        endpoint,
        device
    );

    let provider = HttpEngineProvider::new(endpoint, token, timeout_secs)?;
    let monitor = ProcStatusMonitor::new();
    let mut runner = BenchmarkRunner::new(provider, monitor).with_fail_fast(args.fail_fast);

    let report = runner.run(&models, &request, device).await?;
    let rendered = ReportRenderer::render(&report, format);
    println!("{rendered}");

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write report to: {output_path}"))?;
        println!("Report saved to: {output_path}");
    }

    Ok(())
}

fn resolve_models(
    args: &cli::RunArgs,
    env: &EnvConfig,
    file: &ConfigFile,
) -> Result<Vec<String>> {
    if let Some(list) = &args.models {
        let models: Vec<String> = list
            .split(',')
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if models.is_empty() {
            anyhow::bail!("--models was given but no model identifiers were parsed");
        }
        return Ok(models);
    }

    if let Some(name) = &args.set {
        let set = file
            .model_set(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown model set: {name}"))?;
        return Ok(set.models);
    }

    if let Some(models) = env.model_list() {
        return Ok(models);
    }

    Ok(file.app.default_models.clone())
}

fn list_catalog(args: cli::ListArgs) {
    println!("\nBuilt-in Summarization Models\n");
    println!("──────────────────────────────────────────────────────────────────────");

    for model in models::catalog() {
        println!("  {:34} [{}]", model.id, model.family);
        if args.detailed {
            println!("      {}", model.description);
        }
    }

    println!("\nModel Sets:\n");
    for set in ModelSet::predefined() {
        println!(
            "  {:10} - {} ({} models)",
            set.name,
            set.description,
            set.models.len()
        );
    }

    if args.documents {
        println!("\nBuilt-in Documents:\n");
        for doc in corpus::all() {
            println!(
                "  {:12} {:48} {:>5} words",
                doc.name,
                doc.title,
                doc.word_count()
            );
        }
    }

    println!();
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    use std::path::Path;

    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let config = ConfigFile::load_default()?;
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./sumbench.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
