//! Type-safe wrappers for player and season identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for API-Football player IDs.
///
/// Keeps player IDs from being mixed up with other numeric values such as
/// seasons or minute counts.
///
/// # Examples
///
/// ```rust
/// use scoreline::PlayerId;
///
/// let player_id = PlayerId::new(276);
/// assert_eq!(player_id.as_u32(), 276);
/// assert_eq!(player_id.to_string(), "276");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new PlayerId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for season years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_roundtrip() {
        let id = PlayerId::new(276);
        assert_eq!(id.as_u32(), 276);
        assert_eq!(id, PlayerId(276));
    }

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default().as_u16(), 2024);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::new(99999).to_string(), "99999");
        assert_eq!(Season::new(2023).to_string(), "2023");
    }

    #[test]
    fn test_serde_as_plain_number() {
        let id: PlayerId = serde_json::from_str("276").unwrap();
        assert_eq!(id, PlayerId::new(276));
        assert_eq!(serde_json::to_string(&id).unwrap(), "276");
    }
}
