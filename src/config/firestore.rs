use secrecy::SecretString;

/// Connection details for the hosted document backend.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct FirestoreSettings {
    pub project_id: String,
    #[serde(default = "default_database_id")]
    pub database_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Serve seeded fixtures from memory instead of the hosted backend.
    #[serde(default)]
    pub demo_mode: bool,
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_endpoint() -> String {
    "https://firestore.googleapis.com".to_string()
}
