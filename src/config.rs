use anyhow::{Context, Result};
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use tracing::{debug, info};

/// Credentials for the hosted listing database
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// File backing the key-value store
    pub data_file: PathBuf,
    /// Remote listing store; local storage is used when unset
    pub remote: Option<RemoteConfig>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        let remote = match (var("REALTY_SUPABASE_URL"), var("REALTY_SUPABASE_KEY")) {
            (Some(url), Some(api_key)) => Some(RemoteConfig { url, api_key }),
            _ => {
                info!("Remote listing store not configured, using local storage");
                None
            }
        };

        Ok(Self {
            data_file: try_load("REALTY_DATA_FILE", "realty-data.json")?,
            remote,
            http_timeout: Duration::from_secs(try_load("REALTY_HTTP_TIMEOUT_SECS", "30")?),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
