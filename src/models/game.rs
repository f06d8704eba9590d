// src/models/game.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, GameStatus::Completed)
    }
}

impl From<String> for GameStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "completed" | "finished" | "final" => GameStatus::Completed,
            "in_progress" | "in progress" | "live" => GameStatus::InProgress,
            _ => GameStatus::Scheduled,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Scheduled
    }
}

impl Serialize for GameStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.into())
    }
}

/// One side of a fixture. The ingestion process only reliably labels the
/// home club's own side, so team and club identifiers are optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GameSide {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
}

impl GameSide {
    /// Missing scores read as 0 so half-entered records still aggregate.
    pub fn score_or_zero(&self) -> i32 {
        self.score.unwrap_or(0)
    }
}

/// A scheduled or completed match between two teams.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Game {
    pub id: String,
    #[serde(default, deserialize_with = "dates::deserialize_flexible")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub round: Option<i32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub home_team: GameSide,
    #[serde(default)]
    pub away_team: GameSide,
    #[serde(default)]
    pub fixture_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GamesFeedQuery {
    pub team_ids: Option<String>,
    pub limit: Option<i64>,
    pub days: Option<i64>,
}

impl GamesFeedQuery {
    /// Comma-separated team ids in the query string become a scoping list.
    pub fn team_id_list(&self) -> Option<Vec<String>> {
        self.team_ids
            .as_ref()
            .map(|raw| {
                raw.split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect::<Vec<String>>()
            })
            .filter(|ids| !ids.is_empty())
    }
}

impl fmt::Display for GamesFeedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team_ids: {:?}, limit: {:?}, days: {:?}",
            self.team_ids, self.limit, self.days
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GamesLimitQuery {
    pub limit: Option<i64>,
}
