use serde::{Deserialize, Serialize};
use std::fmt;

/// Nested stat counters on a player record. Counts default to 0 for fields
/// the ingestion process has not written yet.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PlayerStats {
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub appearances: i32,
    #[serde(default)]
    pub green_cards: i32,
    #[serde(default)]
    pub yellow_cards: i32,
    #[serde(default)]
    pub red_cards: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub primary_team_id: Option<String>,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopScorersQuery {
    pub min_goals: Option<i64>,
    pub limit: Option<i64>,
}

impl fmt::Display for TopScorersQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_goals: {:?}, limit: {:?}",
            self.min_goals, self.limit
        )
    }
}
