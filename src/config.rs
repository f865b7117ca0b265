//! Runtime settings: API endpoints, the odds API key, retry and fan-out knobs.
//!
//! Every value has a default and can be overridden through the environment
//! (a `.env` file in the working directory is honoured) or the CLI.

use std::{path::PathBuf, time::Duration};

use crate::error::{Result, ScraplError};

pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";
pub const ODDS_BASE_URL: &str = "https://api.the-odds-api.com/v4/sports";

pub const ODDS_API_KEY_ENV_VAR: &str = "API_KEY";
pub const FPL_BASE_URL_ENV_VAR: &str = "SCRAPL_FPL_BASE_URL";
pub const ODDS_BASE_URL_ENV_VAR: &str = "SCRAPL_ODDS_BASE_URL";
pub const MAX_ATTEMPTS_ENV_VAR: &str = "SCRAPL_MAX_ATTEMPTS";
pub const RETRY_DELAY_ENV_VAR: &str = "SCRAPL_RETRY_DELAY_MS";
pub const CONCURRENCY_ENV_VAR: &str = "SCRAPL_CONCURRENCY";

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 500;
const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone)]
pub struct Settings {
    pub fpl_base_url: String,
    pub odds_base_url: String,
    pub odds_api_key: Option<String>,
    /// Total tries per request, including the first one.
    pub max_attempts: u32,
    pub retry_delay: Duration,
    /// Upper bound on in-flight per-player requests.
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fpl_base_url: FPL_BASE_URL.to_string(),
            odds_base_url: ODDS_BASE_URL.to_string(),
            odds_api_key: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Settings {
    /// Defaults overlaid with the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(url) = lookup(FPL_BASE_URL_ENV_VAR) {
            settings.fpl_base_url = url;
        }
        if let Some(url) = lookup(ODDS_BASE_URL_ENV_VAR) {
            settings.odds_base_url = url;
        }
        settings.odds_api_key = lookup(ODDS_API_KEY_ENV_VAR).filter(|k| !k.trim().is_empty());

        if let Some(raw) = lookup(MAX_ATTEMPTS_ENV_VAR) {
            settings.max_attempts = parse_setting(MAX_ATTEMPTS_ENV_VAR, &raw)?;
        }
        if let Some(raw) = lookup(RETRY_DELAY_ENV_VAR) {
            settings.retry_delay = Duration::from_millis(parse_setting(RETRY_DELAY_ENV_VAR, &raw)?);
        }
        if let Some(raw) = lookup(CONCURRENCY_ENV_VAR) {
            settings.concurrency = parse_setting(CONCURRENCY_ENV_VAR, &raw)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(ScraplError::InvalidConfig {
                message: format!("{MAX_ATTEMPTS_ENV_VAR} must be at least 1"),
            });
        }
        if self.concurrency == 0 {
            return Err(ScraplError::InvalidConfig {
                message: format!("{CONCURRENCY_ENV_VAR} must be at least 1"),
            });
        }
        Ok(())
    }

    /// The odds API key, or the error naming where it should come from.
    pub fn require_api_key(&self) -> Result<&str> {
        self.odds_api_key
            .as_deref()
            .ok_or_else(|| ScraplError::MissingApiKey {
                env_var: ODDS_API_KEY_ENV_VAR.to_string(),
            })
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| ScraplError::InvalidConfig {
        message: format!("{key} has invalid value '{raw}'"),
    })
}

/// Path: <data dir>/scrapl/scraped_data.json
pub fn default_export_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("scrapl").join("scraped_data.json")
}
