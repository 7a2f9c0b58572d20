// ABOUTME: YAML configuration loading for API key and workspaces
// ABOUTME: Searches ./config.yaml then ~/.airtable-replicator/config.yaml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Airtable API key; a CLI flag or the environment can override it.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Workspaces available for base creation. Empty disables creation.
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

/// Load the configuration.
///
/// An explicit path must exist; otherwise the default locations are searched
/// and a missing file yields an empty config (the API key can still come from
/// the flag or environment).
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        return parse(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()));
    }

    for candidate in candidate_paths() {
        if candidate.exists() {
            tracing::debug!("loading configuration from {}", candidate.display());
            let text = std::fs::read_to_string(&candidate)
                .with_context(|| format!("Failed to read config file {}", candidate.display()))?;
            return parse(&text)
                .with_context(|| format!("Failed to parse config file {}", candidate.display()));
        }
    }

    Ok(Config::default())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".airtable-replicator").join(DEFAULT_CONFIG_FILE));
    }
    paths
}

fn parse(text: &str) -> Result<Config> {
    serde_yaml::from_str(text).context("Invalid YAML configuration")
}

impl Config {
    /// Resolve the API key: CLI/env override first, then the config file.
    pub fn resolve_api_key(&self, override_key: Option<String>) -> Result<String> {
        override_key
            .or_else(|| self.api_key.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No API key provided. Set `api_key` in {} or pass --api-key / AIRTABLE_API_KEY.",
                    DEFAULT_CONFIG_FILE
                )
            })
    }

    /// Resolve the per-request timeout: CLI override, then config, then default.
    pub fn request_timeout(&self, override_secs: Option<u64>) -> Duration {
        Duration::from_secs(
            override_secs
                .or(self.request_timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}
