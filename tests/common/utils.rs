use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::net::TcpListener;

use mentone_backend::config::settings::get_config;
use mentone_backend::run;
use mentone_backend::store::{DocumentStore, MemoryStore};
use mentone_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: MemoryStore,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    // Every test gets its own empty in-memory store
    let store = MemoryStore::new();
    let server = run(listener, DocumentStore::Memory(store.clone()), configuration)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address, store }
}

pub fn seed_home_club(app: &TestApp) {
    app.store.insert(
        "clubs",
        json!({
            "id": "mentone",
            "name": "Mentone Hockey Club",
            "short_name": "Mentone",
            "is_home_club": true
        }),
    );
}

pub fn seed_team(app: &TestApp, id: &str, name: &str, team_type: &str, gender: &str) {
    app.store.insert(
        "teams",
        json!({
            "id": id,
            "name": name,
            "club": "mentone",
            "type": team_type,
            "gender": gender,
            "season": "2025"
        }),
    );
}

/// One side of a seeded game. A team id marks the side as belonging to
/// the home club, matching how the ingestion process labels records.
pub fn side(team_id: Option<&str>, name: &str, score: Option<i32>) -> Value {
    let mut side = json!({ "name": name });
    if let Some(team_id) = team_id {
        side["id"] = json!(team_id);
        side["club"] = json!("mentone");
    }
    if let Some(score) = score {
        side["score"] = json!(score);
    }
    side
}

pub fn seed_game(
    app: &TestApp,
    id: &str,
    date: DateTime<Utc>,
    status: &str,
    home: Value,
    away: Value,
) {
    app.store.insert(
        "games",
        json!({
            "id": id,
            "date": date.to_rfc3339(),
            "status": status,
            "round": 1,
            "venue": "Mentone Grammar Playing Fields",
            "home_team": home,
            "away_team": away
        }),
    );
}

pub fn seed_player(app: &TestApp, id: &str, name: &str, goals: i32) {
    app.store.insert(
        "players",
        json!({
            "id": id,
            "name": name,
            "teams": ["team_37291"],
            "gender": "Men",
            "stats": {
                "goals": goals,
                "appearances": 3,
                "green_cards": 0,
                "yellow_cards": 0,
                "red_cards": 0
            }
        }),
    );
}
