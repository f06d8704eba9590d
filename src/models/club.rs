use serde::{Deserialize, Serialize};

/// A club fielding one or more teams. Club records are written by the
/// ingestion process; this service only reads them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Club {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub is_home_club: bool,
}
