use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::Value;

mod common;
use common::utils::{seed_game, seed_home_club, seed_team, side, spawn_app};

#[tokio::test]
async fn clubs_list_contains_the_seeded_club() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    let client = Client::new();

    let response = client
        .get(&format!("{}/clubs", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["success"], true);
    assert_eq!(json_response["total_count"], 1);
    assert_eq!(json_response["data"][0]["name"], "Mentone Hockey Club");
}

#[tokio::test]
async fn club_lookup_returns_404_for_unknown_id() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    let client = Client::new();

    let response = client
        .get(&format!("{}/clubs/somewhere_else", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["success"], false);
    assert_eq!(json_response["message"], "Club not found");
}

#[tokio::test]
async fn club_stats_aggregate_results_from_both_sides() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    seed_team(&test_app, "team_2", "Mentone - Women's Premier League", "Senior", "Women");
    let now = Utc::now();

    // Home win for one squad, away draw for the other.
    seed_game(
        &test_app,
        "g_win",
        now - Duration::days(14),
        "completed",
        side(Some("team_1"), "Mentone - Men's Vic League 1", Some(4)),
        side(None, "Camberwell - Men's Vic League 1", Some(2)),
    );
    seed_game(
        &test_app,
        "g_draw",
        now - Duration::days(7),
        "completed",
        side(None, "Footscray - Women's Premier League", Some(1)),
        side(Some("team_2"), "Mentone - Women's Premier League", Some(1)),
    );
    // Still to be played, so it must not count.
    seed_game(
        &test_app,
        "g_future",
        now + Duration::days(3),
        "scheduled",
        side(Some("team_1"), "Mentone - Men's Vic League 1", None),
        side(None, "Greensborough - Men's Vic League 1", None),
    );

    let client = Client::new();
    let response = client
        .get(&format!("{}/clubs/mentone/stats", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["success"], true);

    let stats = &json_response["data"];
    assert_eq!(stats["games_played"], 2);
    assert_eq!(stats["wins"], 1);
    assert_eq!(stats["draws"], 1);
    assert_eq!(stats["losses"], 0);
    assert_eq!(stats["goals_for"], 5);
    assert_eq!(stats["goals_against"], 3);
    assert_eq!(stats["goal_difference"], 2);
    assert_eq!(stats["win_percentage"], 50.0);
    // Ladder points make no sense across competitions.
    assert!(stats.get("points").is_none());
}

#[tokio::test]
async fn club_stats_return_404_for_unknown_club() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    let client = Client::new();

    let response = client
        .get(&format!("{}/clubs/nowhere/stats", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn club_games_feed_is_newest_first_and_limited() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    seed_team(&test_app, "team_1", "Mentone - Men's Vic League 1", "Senior", "Men");
    let now = Utc::now();

    for (id, days_ago) in [("g_old", 21), ("g_mid", 14), ("g_new", 7)] {
        seed_game(
            &test_app,
            id,
            now - Duration::days(days_ago),
            "completed",
            side(Some("team_1"), "Mentone - Men's Vic League 1", Some(2)),
            side(None, "Opponent", Some(1)),
        );
    }

    let client = Client::new();
    let response = client
        .get(&format!(
            "{}/clubs/mentone/games?limit=2",
            &test_app.address
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["total_count"], 2);
    assert_eq!(json_response["data"][0]["id"], "g_new");
    assert_eq!(json_response["data"][1]["id"], "g_mid");
}
