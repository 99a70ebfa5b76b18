//! Stable output schema served to API consumers.
//!
//! This is the service's contract: decoupled from the provider's raw,
//! unstable payload and never mutated after construction.

use serde::{Deserialize, Serialize};

use crate::types::PlayerId;

/// Normalized season statistics for a single player.
///
/// Built by the resolver either from a cache hit (deserialized) or freshly
/// from a raw upstream payload. Serde defaults mirror the schema defaults so
/// older cache entries with missing optional fields still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    #[serde(default = "default_team")]
    pub team: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub minutes_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    /// Goals per 90 minutes played, rounded to two decimal places.
    /// Zero when no minutes were played.
    #[serde(default)]
    pub goals_per_90: f64,
}

fn default_team() -> String {
    "Unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let record: PlayerStatsRecord = serde_json::from_str(
            r#"{"player_id": 276, "player_name": "Erling Haaland"}"#,
        )
        .unwrap();

        assert_eq!(record.player_id, PlayerId::new(276));
        assert_eq!(record.player_name, "Erling Haaland");
        assert_eq!(record.team, "Unknown");
        assert_eq!(record.position, None);
        assert_eq!(record.games_played, 0);
        assert_eq!(record.minutes_played, 0);
        assert_eq!(record.goals, 0);
        assert_eq!(record.assists, 0);
        assert_eq!(record.goals_per_90, 0.0);
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = PlayerStatsRecord {
            player_id: PlayerId::new(276),
            player_name: "Erling Haaland".to_string(),
            team: "Manchester City".to_string(),
            position: Some("Attacker".to_string()),
            games_played: 35,
            minutes_played: 3024,
            goals: 36,
            assists: 8,
            goals_per_90: 1.07,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PlayerStatsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
