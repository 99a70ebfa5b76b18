//! File-backed read-through cache with per-entry TTL.
//!
//! Entries are JSON envelopes (`expires_at` + value) stored under the
//! configured cache directory, one file per fingerprint. Expiry is passive:
//! an entry whose deadline has passed simply reads as absent, and nothing
//! ever deletes it. The store is best-effort and disposable; wiping the
//! directory loses nothing but warm-cache latency.
//!
//! A store that cannot be reached surfaces as `CacheUnavailable`, which is
//! distinct from a miss: the resolver treats the two differently.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Settings;
use crate::error::{Result, ScorelineError};


/// Envelope persisted for every cache entry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    /// Unix timestamp (seconds) after which the entry reads as absent.
    expires_at: u64,
    value: serde_json::Value,
}

/// TTL'd key-value store for normalized records.
///
/// Handles are scoped: construct with [`StatsCache::new`], call
/// [`StatsCache::open`] before any operation, and let the handle drop (or
/// call [`StatsCache::close`]) when the request is done. Operations on an
/// unopened handle fail with `ClientNotInitialized`.
pub struct StatsCache {
    dir: PathBuf,
    opened: bool,
}

impl StatsCache {
    pub fn new(settings: &Settings) -> Self {
        Self {
            dir: settings.cache_dir.clone(),
            opened: false,
        }
    }

    /// Prepare the backing directory for reads and writes.
    pub fn open(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ScorelineError::CacheUnavailable {
            message: format!("cannot open cache at {}: {}", self.dir.display(), e),
        })?;
        self.opened = true;
        Ok(())
    }

    /// Release the handle. Dropping it has the same effect.
    pub fn close(&mut self) {
        self.opened = false;
    }

    /// Fetch the value stored under `key`, if present and unexpired.
    ///
    /// "Never written" and "expired" both surface as `Ok(None)`. A stored
    /// value that cannot be parsed fails the read with `MalformedCacheEntry`
    /// rather than returning partial data.
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        if !self.opened {
            return Err(ScorelineError::ClientNotInitialized);
        }

        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ScorelineError::CacheUnavailable {
                    message: e.to_string(),
                })
            }
        };

        let envelope: CacheEnvelope =
            serde_json::from_str(&raw).map_err(|e| ScorelineError::MalformedCacheEntry {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if envelope.expires_at <= unix_now() {
            return Ok(None);
        }

        let value =
            serde_json::from_value(envelope.value).map_err(|e| {
                ScorelineError::MalformedCacheEntry {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            })?;
        Ok(Some(value))
    }

    /// Store `value` under `key`, overwriting any existing entry, with
    /// expiry = now + `ttl` seconds.
    pub fn set<T>(&self, key: &str, value: &T, ttl: u64) -> Result<()>
    where
        T: Serialize,
    {
        if !self.opened {
            return Err(ScorelineError::ClientNotInitialized);
        }

        let envelope = CacheEnvelope {
            expires_at: unix_now().saturating_add(ttl),
            value: serde_json::to_value(value)?,
        };
        let content = serde_json::to_string_pretty(&envelope)?;

        fs::write(self.entry_path(key), content).map_err(|e| {
            ScorelineError::CacheUnavailable {
                message: e.to_string(),
            }
        })
    }

    /// Path: {cache_dir}/{key with ':' mapped to '_'}.json
    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "_")))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
