use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;

use super::endpoints::{
    API_KEY_VAR, DEFAULT_TIMEOUT_SECS, EXCHANGE_RATES_URL, FINNHUB_QUOTE_URL, FINNHUB_SEARCH_URL,
    QUOTE_URL_VAR, RATES_URL_VAR, SEARCH_URL_VAR, TIMEOUT_VAR,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("HTTP_TIMEOUT_SECS must be a positive number of seconds (got: {0})")]
    InvalidTimeout(String),

    #[error("failed to read env file: {path:?}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Everything the pipeline needs from the outside world: the access token
/// and where to find the three endpoints.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub search_url: Url,
    pub quote_url: Url,
    pub rates_url: Url,
    pub timeout: Duration,
}

impl Settings {
    /// Process environment wins over the env file. Without an explicit file
    /// a `.env` in the working directory is used when present.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => dotenvy::dotenv_iter()
                .map(|iter| iter.filter_map(|item| item.ok()).collect())
                .unwrap_or_default(),
        };

        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let search_url = url_var(&lookup, SEARCH_URL_VAR, FINNHUB_SEARCH_URL)?;
        let quote_url = url_var(&lookup, QUOTE_URL_VAR, FINNHUB_QUOTE_URL)?;
        let rates_url = url_var(&lookup, RATES_URL_VAR, EXCHANGE_RATES_URL)?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Settings {
            api_key,
            search_url,
            quote_url,
            rates_url,
            timeout,
        })
    }
}

fn url_var<F>(lookup: &F, var: &'static str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());

    Url::parse(value.trim()).map_err(|_| ConfigError::InvalidUrl { var, value })
}

/// Reads `KEY=VALUE` pairs without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_err = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_err)?
        .map(|item| item.map_err(to_err))
        .collect()
}
