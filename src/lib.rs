//! Scoreline: player football statistics over HTTP
//!
//! A small microservice that serves normalized player statistics sourced
//! from the API-Football provider, with a read-through TTL cache in front
//! of the upstream to cut latency and rate-limited calls.
//!
//! ## Features
//!
//! - **Read-Through Caching**: requests are answered from a TTL cache when
//!   possible; misses fetch from upstream and populate the cache
//! - **Response Normalization**: the provider's nested, unstable payload is
//!   flattened into a stable output schema with tolerant defaults
//! - **Derived Metrics**: per-90-minute goal rate computed at resolution time
//! - **Typed Failures**: upstream, cache, and domain failures are distinct
//!   and map to distinct HTTP responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scoreline::{config::Settings, resolver::resolve_player_stats, PlayerId, Season};
//!
//! # async fn example() -> scoreline::Result<()> {
//! let settings = Settings::from_env()?;
//! let record = resolve_player_stats(&settings, PlayerId::new(276), Season::new(2024)).await?;
//! println!("{} scored {} goals", record.player_name, record.goals);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your API-Football key before starting the server:
//! ```bash
//! export API_FOOTBALL_KEY=your-key
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ScorelineError};
pub use models::PlayerStatsRecord;
pub use types::{PlayerId, Season};
