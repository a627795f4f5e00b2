//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Summarization Model Benchmark Tool
#[derive(Parser, Debug)]
#[command(name = "sumbench")]
#[command(version = "0.1.0")]
#[command(about = "Benchmark latency, peak memory, and output of summarization models")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the benchmark over a list of models
    Run(RunArgs),

    /// List built-in models, model sets, and documents
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Comma-separated model identifiers to benchmark
    #[arg(short, long)]
    pub models: Option<String>,

    /// Named model set (default, fast, quality, or one from the config file)
    #[arg(short, long, conflicts_with = "models")]
    pub set: Option<String>,

    /// Built-in document to summarize (article, ai-history, evolution)
    #[arg(short, long, default_value = "article")]
    pub doc: String,

    /// Summarize the contents of a file instead of a built-in document
    #[arg(short, long, conflicts_with = "doc")]
    pub input: Option<String>,

    /// Maximum summary length
    #[arg(long, default_value = "100")]
    pub max_length: u32,

    /// Minimum summary length
    #[arg(long, default_value = "25")]
    pub min_length: u32,

    /// Batch size passed to the engine
    #[arg(long, default_value = "1")]
    pub batch_size: u32,

    /// Device selection: auto, cpu, or an accelerator index
    #[arg(long)]
    pub device: Option<String>,

    /// Inference endpoint base URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Bearer token for authenticated endpoints
    #[arg(long)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Report format (text, json, json-pretty, markdown, csv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also write the rendered report to a file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Abort the whole run on the first per-model failure
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show model descriptions
    #[arg(short, long)]
    pub detailed: bool,

    /// Show built-in documents
    #[arg(long)]
    pub documents: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./sumbench.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the file (default: discovered location)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Show supported environment variables
    Env,
}
