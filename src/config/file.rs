//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{AppConfig, ModelSet, RequestDefaults};

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./sumbench.yaml",
    "./sumbench.yml",
    "./.sumbench.yaml",
    "~/.config/sumbench/config.yaml",
    "~/.sumbench.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,

    /// Request-template defaults
    #[serde(default)]
    pub request: RequestDefaults,

    /// Custom model sets, in addition to the predefined ones
    #[serde(default)]
    pub model_sets: Vec<ModelSet>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
            request: RequestDefaults::default(),
            model_sets: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        for location in CONFIG_LOCATIONS {
            let path = expand_path(location);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load configuration from default location, or defaults if none exists
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }

        if self.app.default_models.is_empty() {
            anyhow::bail!("app.default_models must name at least one model");
        }

        if self.request.min_length == 0 || self.request.max_length == 0 {
            anyhow::bail!("request length bounds must be positive");
        }
        if self.request.min_length > self.request.max_length {
            anyhow::bail!(
                "request.min_length {} exceeds request.max_length {}",
                self.request.min_length,
                self.request.max_length
            );
        }

        for set in &self.model_sets {
            if set.models.is_empty() {
                anyhow::bail!("model set '{}' is empty", set.name);
            }
        }

        Ok(())
    }

    /// Generate example configuration
    pub fn example() -> Self {
        Self {
            version: "1.0".to_string(),
            app: AppConfig::default(),
            request: RequestDefaults::default(),
            model_sets: ModelSet::predefined(),
        }
    }

    /// Look up a model set by name, custom sets first
    pub fn model_set(&self, name: &str) -> Option<ModelSet> {
        self.model_sets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .or_else(|| ModelSet::find(name))
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_default() {
        let config = ConfigFile::default();
        assert_eq!(config.version, "1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_save_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = ConfigFile::example();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.version, config.version);
        assert_eq!(loaded.app.endpoint, config.app.endpoint);
        assert_eq!(loaded.model_sets.len(), config.model_sets.len());
    }

    #[test]
    fn test_config_file_save_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ConfigFile::example();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.request.max_length, config.request.max_length);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let mut config = ConfigFile::default();
        config.request.min_length = 200;
        config.request.max_length = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model_set() {
        let mut config = ConfigFile::default();
        config.model_sets.push(ModelSet {
            name: "empty".to_string(),
            description: String::new(),
            models: Vec::new(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_set_lookup_prefers_custom() {
        let mut config = ConfigFile::default();
        config.model_sets.push(ModelSet {
            name: "fast".to_string(),
            description: "override".to_string(),
            models: vec!["my/model".to_string()],
        });

        let set = config.model_set("fast").unwrap();
        assert_eq!(set.models, vec!["my/model".to_string()]);

        // predefined sets still resolve
        assert!(config.model_set("quality").is_some());
    }

    #[test]
    fn test_expand_path() {
        let path = expand_path("./test.yaml");
        assert_eq!(path, PathBuf::from("./test.yaml"));
    }
}
