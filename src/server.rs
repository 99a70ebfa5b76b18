//! HTTP surface: routing, handlers, and error-to-response mapping.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::config::Settings;
use crate::error::ScorelineError;
use crate::resolver::resolve_player_stats;
use crate::types::{PlayerId, Season};

/// Build the service router over shared read-only settings.
pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/players/:player_id/stats", get(player_stats))
        .with_state(settings)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": "scoreline",
        "status": "operational",
        "message": "Football statistics microservice is running"
    }))
}

/// Liveness probe for container orchestration.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
struct StatsQuery {
    season: Option<u16>,
}

async fn player_stats(
    State(settings): State<Arc<Settings>>,
    Path(player_id): Path<u32>,
    Query(query): Query<StatsQuery>,
) -> Response {
    let player_id = PlayerId::new(player_id);
    let season = query.season.map(Season::new).unwrap_or_default();

    match resolve_player_stats(&settings, player_id, season).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for ScorelineError {
    /// `PlayerNotFound` maps to 404; everything else is a 500 carrying the
    /// failure message, never a stack trace.
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ScorelineError::PlayerNotFound => {
                (StatusCode::NOT_FOUND, "Player not found".to_string())
            }
            err => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch player stats: {}", err),
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
