// src/models/team.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Squad bracket shared by teams and competitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamType {
    Senior,
    Junior,
    MidweekMasters,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Senior => "Senior",
            TeamType::Junior => "Junior",
            TeamType::MidweekMasters => "Midweek/Masters",
        }
    }

    /// Section order on the dashboard.
    pub fn all() -> [TeamType; 3] {
        [TeamType::Senior, TeamType::Junior, TeamType::MidweekMasters]
    }
}

impl From<String> for TeamType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "junior" => TeamType::Junior,
            "midweek/masters" | "midweek" | "masters" => TeamType::MidweekMasters,
            _ => TeamType::Senior,
        }
    }
}

impl Default for TeamType {
    fn default() -> Self {
        TeamType::Senior
    }
}

impl Serialize for TeamType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TeamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.into())
    }
}

/// A squad belonging to one club, competing in one competition bracket.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(rename = "type", default)]
    pub team_type: TeamType,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub comp_id: Option<i64>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub fixture_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsQuery {
    pub team_type: Option<String>,
    pub gender: Option<String>,
    pub comp_id: Option<i64>,
}

impl fmt::Display for TeamsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team_type: {:?}, gender: {:?}, comp_id: {:?}",
            self.team_type, self.gender, self.comp_id
        )
    }
}
