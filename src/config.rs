// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::utils::normalize_base_url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const API_URL_ENV: &str = "JOBBOARD_API_URL";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub environment: String,
}

/// One environment section of `config.yaml`
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvironmentSection {
    api_base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            environment: "local".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(url),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Resolve configuration: explicit URL, then `JOBBOARD_API_URL`, then the
    /// environment's section of the YAML file, then defaults.
    pub fn load(api_url: Option<&str>, config_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading client configuration for environment: {}", environment);

        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let section = Self::load_section(&path, &environment, config_path.is_some())?;

        let env_url = std::env::var(API_URL_ENV).ok();
        let api_base_url = api_url
            .map(str::to_string)
            .or(env_url)
            .or(section.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let config = Self {
            api_base_url: normalize_base_url(&api_base_url),
            timeout_secs: section.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            environment,
        };
        config.validate()?;

        info!("Jobs API: {}", config.api_base_url);
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOBBOARD_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_section(path: &Path, environment: &str, required: bool) -> Result<EnvironmentSection> {
        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(EnvironmentSection::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_section(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse_section(content: &str, environment: &str) -> Result<EnvironmentSection> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            anyhow::bail!("API base URL cannot be empty");
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "API base URL must start with http:// or https://: {}",
                self.api_base_url
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least one second");
        }
        Ok(())
    }
}
