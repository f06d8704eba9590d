use serde::{Deserialize, Serialize};

use crate::models::team::TeamType;

/// A competition bracket a team plays in.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Competition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub comp_id: Option<i64>,
    #[serde(rename = "type", default)]
    pub comp_type: TeamType,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub rounds: Option<i32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}
