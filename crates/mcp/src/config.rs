use anyhow::{Context, Result};
use ashby_sdk::{AshbyClient, API_KEY_ENV, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings read from `ashby-mcp.toml`. The API key is never read from the
/// file, only from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub ashby: AshbySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Name reported in `serverInfo`.
    #[serde(default = "default_server_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AshbySection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_server_name() -> String {
    "ashby-mcp".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

impl Default for AshbySection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl McpConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context("Failed to read configuration file")?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    /// Build the Ashby client, taking the API key from `env`
    /// (`ASHBY_API_KEY`). A missing or empty key still yields a client; its
    /// calls fail with "not connected".
    pub fn build_client<F>(&self, env: F) -> Result<AshbyClient>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AshbyClient::builder()
            .base_url(self.ashby.base_url.clone())
            .maybe_api_key(env(API_KEY_ENV));

        if let Some(secs) = self.ashby.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build().context("Failed to create Ashby client")
    }
}

/// Load variables from a `.env` file without overriding ones already set.
///
/// `None` looks in the current directory and its parents. Returns the file
/// that was loaded, or `None` when there is no such file.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}
