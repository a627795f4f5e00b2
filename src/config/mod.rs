//! Configuration module
//!
//! Handles loading and managing configuration. Precedence when resolving a
//! run: CLI flags over environment variables over config file over built-in
//! defaults.

mod env;
mod file;

pub use env::{print_env_help, EnvConfig};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_ENDPOINT;
use crate::models::default_models;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference endpoint base URL
    pub endpoint: String,

    /// Models benchmarked when none are given
    pub default_models: Vec<String>,

    /// Device selection passed to the provider (auto, cpu, or an index)
    pub device: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Default report format
    pub format: String,

    /// Bearer token for authenticated endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_models: default_models(),
            device: "auto".to_string(),
            timeout_secs: 300,
            format: "text".to_string(),
            api_token: None,
        }
    }
}

/// Request-template defaults shared by all models
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RequestDefaults {
    pub max_length: u32,
    pub min_length: u32,
    pub batch_size: u32,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            max_length: 100,
            min_length: 25,
            batch_size: 1,
        }
    }
}

/// A named list of models to benchmark together
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelSet {
    pub name: String,
    pub description: String,
    pub models: Vec<String>,
}

impl ModelSet {
    /// Built-in model sets
    pub fn predefined() -> Vec<ModelSet> {
        vec![
            ModelSet {
                name: "default".to_string(),
                description: "All built-in summarization models".to_string(),
                models: default_models(),
            },
            ModelSet {
                name: "fast".to_string(),
                description: "Distilled model only, for quick comparisons".to_string(),
                models: vec!["sshleifer/distilbart-cnn-12-6".to_string()],
            },
            ModelSet {
                name: "quality".to_string(),
                description: "Full-size models".to_string(),
                models: vec![
                    "google/pegasus-xsum".to_string(),
                    "facebook/bart-large-cnn".to_string(),
                ],
            },
        ]
    }

    /// Find a predefined set by name
    pub fn find(name: &str) -> Option<ModelSet> {
        Self::predefined().into_iter().find(|s| s.name == name)
    }
}
