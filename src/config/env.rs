//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "SUMBENCH";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Endpoint from SUMBENCH_ENDPOINT
    pub endpoint: Option<String>,
    /// Comma-separated model list from SUMBENCH_MODELS
    pub models: Option<String>,
    /// Device from SUMBENCH_DEVICE
    pub device: Option<String>,
    /// Output format from SUMBENCH_FORMAT
    pub format: Option<String>,
    /// Timeout from SUMBENCH_TIMEOUT
    pub timeout: Option<u64>,
    /// Bearer token from SUMBENCH_TOKEN (HF_TOKEN as fallback)
    pub token: Option<String>,
    /// Config file from SUMBENCH_CONFIG
    pub config_file: Option<String>,
    /// Verbose from SUMBENCH_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            endpoint: get_env("ENDPOINT"),
            models: get_env("MODELS"),
            device: get_env("DEVICE"),
            format: get_env("FORMAT"),
            timeout: get_env_parse("TIMEOUT"),
            token: get_env("TOKEN").or_else(|| env::var("HF_TOKEN").ok()),
            config_file: get_env("CONFIG"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.endpoint.is_some()
            || self.models.is_some()
            || self.device.is_some()
            || self.format.is_some()
            || self.timeout.is_some()
            || self.token.is_some()
            || self.config_file.is_some()
            || self.verbose.is_some()
    }

    /// Models as a list, if set
    pub fn model_list(&self) -> Option<Vec<String>> {
        self.models.as_ref().map(|value| {
            value
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect()
        })
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print all SUMBENCH environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_ENDPOINT    Inference endpoint base URL");
    println!("  {ENV_PREFIX}_MODELS      Comma-separated model identifiers");
    println!("  {ENV_PREFIX}_DEVICE      Device selection (auto, cpu, or an index)");
    println!("  {ENV_PREFIX}_FORMAT      Report format (text, json, json-pretty, markdown, csv)");
    println!("  {ENV_PREFIX}_TIMEOUT     Per-request timeout in seconds");
    println!("  {ENV_PREFIX}_TOKEN       Bearer token for authenticated endpoints");
    println!("  {ENV_PREFIX}_CONFIG      Path to configuration file");
    println!("  {ENV_PREFIX}_VERBOSE     Enable verbose output (true/false)");
    println!("  HF_TOKEN              Token fallback when {ENV_PREFIX}_TOKEN is unset");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_MODELS=sshleifer/distilbart-cnn-12-6");
    println!("  export {ENV_PREFIX}_FORMAT=markdown");
    println!("  sumbench run");
}

/// Builder for setting environment variables (useful for testing)
#[cfg(test)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

#[cfg(test)]
impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_ENDPOINT"), endpoint.into()));
        self
    }

    pub fn models(mut self, models: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_MODELS"), models.into()));
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

/// Guard that restores environment variables on drop
#[cfg(test)]
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.endpoint.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_env_overrides() {
        let _guard = EnvBuilder::new()
            .endpoint("http://localhost:8080")
            .models("a/b, c/d")
            .timeout(60)
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.endpoint, Some("http://localhost:8080".to_string()));
        assert_eq!(config.timeout, Some(60));
        assert_eq!(
            config.model_list(),
            Some(vec!["a/b".to_string(), "c/d".to_string()])
        );
        assert!(config.has_any());
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().verbose(true).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.verbose, Some(true));
    }
}
