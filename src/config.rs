use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Settings for talking to the spreadsheet backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub access_token: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: None,
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let ConfigArgs {
            config,
            api_base: cli_api_base,
            access_token: cli_access_token,
            timeout_ms: cli_timeout_ms,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            api_base: file_api_base,
            access_token: file_access_token,
            timeout_ms: file_timeout_ms,
        } = file_config;

        let api_base = cli_api_base
            .or(file_api_base)
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(ConfigError::new(format!(
                "api base '{api_base}' must start with http:// or https://"
            ))
            .into());
        }

        let access_token = cli_access_token
            .or(file_access_token)
            .filter(|token| !token.trim().is_empty());

        let timeout_ms = cli_timeout_ms
            .or(file_timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let timeout_ms = if timeout_ms == 0 {
            None
        } else {
            Some(timeout_ms)
        };

        Ok(Self {
            api_base,
            access_token,
            timeout_ms,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "GSHEET_OPS_API_BASE",
        value_name = "URL",
        help = "Sheets API base URL (default: https://sheets.googleapis.com/v4)",
        global = true
    )]
    pub api_base: Option<String>,

    #[arg(
        long,
        env = "GSHEET_OPS_ACCESS_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true,
        help = "OAuth bearer token used for API calls",
        global = true
    )]
    pub access_token: Option<String>,

    #[arg(
        long,
        env = "GSHEET_OPS_TIMEOUT_MS",
        value_name = "MS",
        help = "HTTP request timeout in milliseconds (default: 30000; 0 disables)",
        value_parser = clap::value_parser!(u64),
        global = true
    )]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    api_base: Option<String>,
    access_token: Option<String>,
    timeout_ms: Option<u64>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        return Err(ConfigError::new(format!("config file {path:?} does not exist")).into());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|err| ConfigError::new(format!("failed to parse YAML config {path:?}: {err}")))?,
        "json" => serde_json::from_str(&contents)
            .map_err(|err| ConfigError::new(format!("failed to parse JSON config {path:?}: {err}")))?,
        other => {
            return Err(ConfigError::new(format!("unsupported config extension: {other}")).into());
        }
    };
    Ok(parsed)
}
