use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::Value;

mod common;
use common::utils::{seed_game, seed_team, side, spawn_app};

#[tokio::test]
async fn upcoming_feed_stays_inside_the_default_window() {
    let test_app = spawn_app().await;
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    let now = Utc::now();

    seed_game(
        &test_app,
        "g_tomorrow",
        now + Duration::days(1),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Camberwell", None),
    );
    seed_game(
        &test_app,
        "g_weekend",
        now + Duration::days(4),
        "scheduled",
        side(None, "Hawthorn", None),
        side(Some("team_1"), "Mentone", None),
    );
    seed_game(
        &test_app,
        "g_next_month",
        now + Duration::days(30),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Greensborough", None),
    );
    seed_game(
        &test_app,
        "g_played",
        now - Duration::days(2),
        "completed",
        side(Some("team_1"), "Mentone", Some(2)),
        side(None, "Footscray", Some(1)),
    );

    let client = Client::new();
    let response = client
        .get(&format!("{}/games/upcoming", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["total_count"], 2);
    // Soonest first.
    assert_eq!(json_response["data"][0]["id"], "g_tomorrow");
    assert_eq!(json_response["data"][1]["id"], "g_weekend");
}

#[tokio::test]
async fn upcoming_feed_accepts_a_custom_horizon_and_scope() {
    let test_app = spawn_app().await;
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    seed_team(&test_app, "team_2", "Mentone - Women's Premier League", "Senior", "Women");
    let now = Utc::now();

    seed_game(
        &test_app,
        "g_men",
        now + Duration::days(2),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Camberwell", None),
    );
    seed_game(
        &test_app,
        "g_women",
        now + Duration::days(3),
        "scheduled",
        side(None, "Doncaster", None),
        side(Some("team_2"), "Mentone", None),
    );
    seed_game(
        &test_app,
        "g_men_far",
        now + Duration::days(20),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Hawthorn", None),
    );

    let client = Client::new();
    let response = client
        .get(&format!(
            "{}/games/upcoming?team_ids=team_1&days=30",
            &test_app.address
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["total_count"], 2);
    assert_eq!(json_response["data"][0]["id"], "g_men");
    assert_eq!(json_response["data"][1]["id"], "g_men_far");
}

#[tokio::test]
async fn upcoming_feed_serves_an_oversized_days_parameter() {
    let test_app = spawn_app().await;
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    let now = Utc::now();

    seed_game(
        &test_app,
        "g_soon",
        now + Duration::days(2),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Camberwell", None),
    );

    let client = Client::new();
    let response = client
        .get(&format!(
            "{}/games/upcoming?days={}",
            &test_app.address,
            i64::MAX
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["success"], true);
    assert_eq!(json_response["total_count"], 1);
    assert_eq!(json_response["data"][0]["id"], "g_soon");
}

#[tokio::test]
async fn results_feed_returns_completed_games_newest_first() {
    let test_app = spawn_app().await;
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    let now = Utc::now();

    seed_game(
        &test_app,
        "g_last_week",
        now - Duration::days(7),
        "completed",
        side(Some("team_1"), "Mentone", Some(3)),
        side(None, "Camberwell", Some(1)),
    );
    seed_game(
        &test_app,
        "g_yesterday",
        now - Duration::days(1),
        "completed",
        side(None, "Hawthorn", Some(2)),
        side(Some("team_1"), "Mentone", Some(2)),
    );
    seed_game(
        &test_app,
        "g_live",
        now,
        "in_progress",
        side(Some("team_1"), "Mentone", Some(1)),
        side(None, "Footscray", Some(0)),
    );
    seed_game(
        &test_app,
        "g_future",
        now + Duration::days(3),
        "scheduled",
        side(Some("team_1"), "Mentone", None),
        side(None, "Greensborough", None),
    );

    let client = Client::new();
    let response = client
        .get(&format!("{}/games/results", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["total_count"], 2);
    assert_eq!(json_response["data"][0]["id"], "g_yesterday");
    assert_eq!(json_response["data"][1]["id"], "g_last_week");
}

#[tokio::test]
async fn results_feed_scopes_to_the_requested_teams() {
    let test_app = spawn_app().await;
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    seed_team(&test_app, "team_2", "Mentone - Women's Premier League", "Senior", "Women");
    let now = Utc::now();

    seed_game(
        &test_app,
        "g_men",
        now - Duration::days(2),
        "completed",
        side(Some("team_1"), "Mentone", Some(1)),
        side(None, "Camberwell", Some(0)),
    );
    seed_game(
        &test_app,
        "g_women",
        now - Duration::days(1),
        "completed",
        side(None, "Doncaster", Some(2)),
        side(Some("team_2"), "Mentone", Some(2)),
    );

    let client = Client::new();
    let response = client
        .get(&format!(
            "{}/games/results?team_ids=team_2&limit=5",
            &test_app.address
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["total_count"], 1);
    assert_eq!(json_response["data"][0]["id"], "g_women");
}
