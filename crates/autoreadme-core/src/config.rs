use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".autoreadme.toml";

/// Top-level configuration from `.autoreadme.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub enhance: EnhanceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: String,
}

fn default_output_file() -> String {
    "README.md".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}

/// Settings for the optional enhancement hook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnhanceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Environment variables whose presence signals an available service.
    #[serde(default = "default_credential_vars")]
    pub credential_vars: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_credential_vars() -> Vec<String> {
    vec![
        "OPENAI_API_KEY".to_string(),
        "ANTHROPIC_API_KEY".to_string(),
        "COHERE_API_KEY".to_string(),
    ]
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            credential_vars: default_credential_vars(),
        }
    }
}

impl Config {
    /// Load configuration from a `.autoreadme.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        Ok(config)
    }

    /// Load from `.autoreadme.toml` in the given directory or any ancestor, or return defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut current = start.as_path();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        log::debug!("loaded config from {}", config_path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!(
                            "failed to load config from '{}': {e:#}. Using defaults.",
                            config_path.display()
                        );
                        Self::default()
                    }
                };
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Self::default()
    }
}
