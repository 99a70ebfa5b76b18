//! HTTP client for the API-Football statistics provider.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

use crate::config::Settings;
use crate::error::{Result, ScorelineError};
use crate::types::{PlayerId, Season};

#[cfg(test)]
mod tests;

/// Fixed per-call timeout for upstream requests.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API-Football key.
const API_KEY_HEADER: &str = "x-apisports-key";

/// Source of raw player-statistics payloads.
///
/// The resolver is generic over this seam so tests can substitute a canned
/// provider and assert on call counts.
pub trait StatsProvider {
    /// Fetch the provider's raw JSON for one `(player, season)` pair.
    fn fetch_player_stats(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// Authenticated client for `GET {base_url}/players`.
///
/// Handles are scoped: construct with [`FootballApiClient::new`], call
/// [`FootballApiClient::connect`] before fetching, and let the handle drop
/// (or call [`FootballApiClient::close`]) to release the connection pool.
/// Fetching before `connect` fails with `ClientNotInitialized`.
pub struct FootballApiClient {
    base_url: String,
    api_key: String,
    inner: Option<reqwest::Client>,
}

impl FootballApiClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_url: settings.api_football_base_url.clone(),
            api_key: settings.api_football_key.clone(),
            inner: None,
        }
    }

    /// Establish the connection pool with the fixed timeout and auth headers.
    pub fn connect(&mut self) -> Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&self.api_key)?);

        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .default_headers(headers)
            .build()?;
        self.inner = Some(client);
        Ok(())
    }

    /// Release the connection pool. Dropping the client has the same effect.
    pub fn close(&mut self) {
        self.inner = None;
    }
}

impl StatsProvider for FootballApiClient {
    /// One outbound network call per invocation; no retries at this layer.
    async fn fetch_player_stats(&self, player_id: PlayerId, season: Season) -> Result<Value> {
        let client = self
            .inner
            .as_ref()
            .ok_or(ScorelineError::ClientNotInitialized)?;

        let url = format!("{}/players", self.base_url);
        let response = client
            .get(&url)
            .query(&[
                ("id", player_id.as_u32().to_string()),
                ("season", season.as_u16().to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ScorelineError::UpstreamUnavailable {
                        message: e.to_string(),
                    }
                } else {
                    ScorelineError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Keep the body for diagnostics; it is part of the error signal.
            let body = response.text().await.unwrap_or_default();
            return Err(ScorelineError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
