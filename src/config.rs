//! Process configuration, loaded once at startup.
//!
//! Settings are read from the environment exactly once and passed by
//! reference (or `Arc`) into the resolver and its collaborators; no module
//! reads the environment on its own after startup.

use std::env;
use std::path::PathBuf;

use crate::error::{Result, ScorelineError};

pub const API_KEY_ENV_VAR: &str = "API_FOOTBALL_KEY";
pub const BASE_URL_ENV_VAR: &str = "API_FOOTBALL_BASE_URL";
pub const CACHE_DIR_ENV_VAR: &str = "SCORELINE_CACHE_DIR";
pub const CACHE_TTL_ENV_VAR: &str = "SCORELINE_CACHE_TTL";
pub const ENVIRONMENT_ENV_VAR: &str = "SCORELINE_ENVIRONMENT";
pub const LOG_LEVEL_ENV_VAR: &str = "SCORELINE_LOG_LEVEL";

pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";
/// Default cache entry lifetime, in seconds.
pub const DEFAULT_CACHE_TTL: u64 = 300;

/// Read-only service configuration, shared across all concurrent requests.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_football_key: String,
    pub api_football_base_url: String,
    /// Directory backing the cache store.
    pub cache_dir: PathBuf,
    /// Cache entry lifetime in seconds.
    pub cache_ttl: u64,
    pub environment: String,
    pub log_level: String,
}

impl Settings {
    /// Load settings from the environment, falling back to defaults for
    /// everything but the API key (which defaults to empty; the upstream
    /// rejects unauthenticated calls on its own).
    pub fn from_env() -> Result<Self> {
        let cache_ttl = match env::var(CACHE_TTL_ENV_VAR) {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| ScorelineError::InvalidConfig {
                    name: CACHE_TTL_ENV_VAR.to_string(),
                    message: e.to_string(),
                })?,
            Err(_) => DEFAULT_CACHE_TTL,
        };

        Ok(Self {
            api_football_key: env::var(API_KEY_ENV_VAR).unwrap_or_default(),
            api_football_base_url: env::var(BASE_URL_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            cache_dir: env::var(CACHE_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_cache_dir()),
            cache_ttl,
            environment: env::var(ENVIRONMENT_ENV_VAR)
                .unwrap_or_else(|_| "development".to_string()),
            log_level: env::var(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Path: ~/.cache/scoreline
fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("scoreline")
}
