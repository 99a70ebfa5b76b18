//! Request resolution: cache lookup, upstream fetch, normalization, and
//! cache write-back.
//!
//! Each resolution is an independent unit of work: it acquires its own
//! cache and upstream handles, releases them on every exit path, and shares
//! nothing mutable with concurrent requests. Two concurrent misses for the
//! same fingerprint may both fetch upstream; the last cache writer wins and
//! both return equivalent data.

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::StatsCache;
use crate::config::Settings;
use crate::error::{Result, ScorelineError};
use crate::models::PlayerStatsRecord;
use crate::provider::{FootballApiClient, StatsProvider};
use crate::types::{PlayerId, Season};


/// Canonical cache key for a `(player, season)` pair.
pub fn fingerprint(player_id: PlayerId, season: Season) -> String {
    format!("player:{}:season:{}", player_id, season)
}

/// Resolve one player/season request end to end against the real upstream.
pub async fn resolve_player_stats(
    settings: &Settings,
    player_id: PlayerId,
    season: Season,
) -> Result<PlayerStatsRecord> {
    let mut cache = StatsCache::new(settings);
    if let Err(err) = cache.open() {
        // Resolution continues without a cache; every get/set below will
        // report the unopened handle and fall through.
        warn!(%err, "cache open failed, continuing without cache");
    }

    let mut client = FootballApiClient::new(settings);
    client.connect()?;
    let record = resolve_with(&client, &cache, player_id, season, settings.cache_ttl).await;
    client.close();
    cache.close();
    record
}

/// The read-through algorithm over an arbitrary provider.
///
/// Cache read failures are not misses, but they must not fail the request
/// either: they are logged and the resolution falls through to the upstream
/// fetch. Cache write failures after a successful fetch are logged and
/// swallowed; fresh data beats cache consistency.
pub async fn resolve_with<P: StatsProvider>(
    provider: &P,
    cache: &StatsCache,
    player_id: PlayerId,
    season: Season,
    ttl: u64,
) -> Result<PlayerStatsRecord> {
    let key = fingerprint(player_id, season);

    match cache.get::<PlayerStatsRecord>(&key) {
        Ok(Some(record)) => {
            debug!(%key, "cache hit");
            return Ok(record);
        }
        Ok(None) => debug!(%key, "cache miss"),
        Err(err) => warn!(%key, %err, "cache read failed, falling through to upstream"),
    }

    let raw = provider.fetch_player_stats(player_id, season).await?;
    let record = normalize_player_stats(player_id, &raw)?;

    if let Err(err) = cache.set(&key, &record, ttl) {
        warn!(%key, %err, "cache write failed, returning uncached result");
    }

    Ok(record)
}

/// Normalize the provider's raw payload into the stable output schema.
///
/// Total over every optional path: absent fields default instead of
/// erroring. The provider has been observed to rename `appearances` to
/// `appearences` between versions, so both spellings are accepted.
pub fn normalize_player_stats(player_id: PlayerId, raw: &Value) -> Result<PlayerStatsRecord> {
    let entry = raw
        .get("response")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .ok_or(ScorelineError::PlayerNotFound)?;

    // The name is the one required field in the payload.
    let player_name = entry
        .get("player")
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| ScorelineError::MalformedPayload {
            field: "player.name".to_string(),
        })?
        .to_string();

    let stats = entry
        .get("statistics")
        .and_then(Value::as_array)
        .and_then(|s| s.first());
    let games = stats.and_then(|s| s.get("games"));
    let goals = stats.and_then(|s| s.get("goals"));

    let games_played = games
        .and_then(|g| g.get("appearances").or_else(|| g.get("appearences")))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    let minutes_played = games
        .and_then(|g| g.get("minutes"))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    let position = games
        .and_then(|g| g.get("position"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let goals_total = goals
        .and_then(|g| g.get("total"))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    let assists = goals
        .and_then(|g| g.get("assists"))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    let team = stats
        .and_then(|s| s.get("team"))
        .and_then(|t| t.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();

    Ok(PlayerStatsRecord {
        player_id,
        player_name,
        team,
        position,
        games_played,
        minutes_played,
        goals: goals_total,
        assists,
        goals_per_90: goals_per_90(goals_total, minutes_played),
    })
}

/// `goals / minutes * 90`, rounded to two decimal places.
/// Zero minutes yields exactly zero; there is no division.
pub fn goals_per_90(goals: u32, minutes_played: u32) -> f64 {
    if minutes_played == 0 {
        return 0.0;
    }
    let per_90 = (goals as f64 / minutes_played as f64) * 90.0;
    (per_90 * 100.0).round() / 100.0
}
