// src/models/stats.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::Game;
use crate::models::team::TeamType;

/// Outcome of one game seen from the scoped side.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

/// Derived standings for a team or a whole club. Never persisted; every
/// field is recomputed from game records on each request.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StatsSummary {
    pub games_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub win_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
}

impl StatsSummary {
    /// Standard result points: three for a win, one for a draw.
    pub fn calculate_points(&self) -> i32 {
        self.wins * 3 + self.draws
    }

    /// Attach result points. Only single-team summaries carry them; a
    /// club-wide summary spans competitions with independent ladders.
    pub fn with_points(mut self) -> Self {
        self.points = Some(self.calculate_points());
        self
    }
}

/// Weekly results rollup served to the dashboard landing view.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_games: usize,
    pub sections: Vec<SummarySection>,
}

/// Classified games of one squad bracket inside the window.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarySection {
    pub team_type: TeamType,
    pub games: Vec<SummaryGame>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryGame {
    pub game: Game,
    pub result: MatchResult,
}
