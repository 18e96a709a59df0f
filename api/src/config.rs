use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding `users.json` and `posts.json`.
    pub data_dir: PathBuf,
    /// Directory served as static assets.
    pub public_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("HOST", "0.0.0.0")?,
            port: try_load("PORT", "3000")?,
            data_dir: try_load("DATA_DIR", "data")?,
            public_dir: try_load("PUBLIC_DIR", "public")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse::<T>()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow::anyhow!("{e}")
        })
        .with_context(|| format!("environment variable {key} is misconfigured"))
}
