use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Repository-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = ".fedctl.yaml";

/// Settings read from a fedctl configuration file.
///
/// These only tune the CLI itself. Flag defaults are never taken from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub verbose: bool,

    /// `tracing` filter directive, e.g. `fedctl=debug`
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the standard config paths
    pub fn load() -> Result<Self> {
        // Try loading in this order:
        // 1. .fedctl.yaml in current directory
        // 2. ~/.config/fedctl/config.yaml (user-specific)
        // 3. Default configuration
        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        candidates.extend(Self::user_config_path());

        Ok(Self::load_first(&candidates))
    }

    /// Load the first existing config file that parses.
    ///
    /// Unreadable or malformed files are skipped with a warning.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_path(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config file");
                    return config;
                }
                Err(err) => warn!("Ignoring config file: {:#}", err),
            }
        }

        Self::default()
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file does not exist: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Get the user configuration path
    pub fn user_config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("fedctl").join("config.yaml"))
        } else {
            // Fallback to home directory
            dirs::home_dir()
                .map(|home_dir| home_dir.join(".config").join("fedctl").join("config.yaml"))
        }
    }

    /// Create a sample configuration file
    pub fn create_sample_config() -> Result<String> {
        let mut sample = Self::default();
        sample.behavior.verbose = true;
        sample.behavior.log_level = Some("fedctl=debug".to_string());

        serde_yaml::to_string(&sample).context("Failed to serialize sample configuration")
    }
}
