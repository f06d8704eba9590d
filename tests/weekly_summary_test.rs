use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::Value;

mod common;
use common::utils::{seed_game, seed_home_club, seed_team, side, spawn_app};

#[tokio::test]
async fn weekly_summary_groups_results_by_bracket_in_display_order() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    seed_team(&test_app, "team_sen", "Mentone - Men's Vic League 1", "Senior", "Men");
    seed_team(&test_app, "team_mid", "Mentone - Men's Masters 35+", "Midweek/Masters", "Men");
    let now = Utc::now();

    seed_game(
        &test_app,
        "senior_win",
        now - Duration::days(1),
        "completed",
        side(Some("team_sen"), "Mentone - Men's Vic League 1", Some(3)),
        side(None, "Camberwell", Some(1)),
    );
    seed_game(
        &test_app,
        "masters_loss",
        now - Duration::days(4),
        "completed",
        side(None, "Frankston", Some(2)),
        side(Some("team_mid"), "Mentone - Men's Masters 35+", Some(1)),
    );
    // Outside the seven day window.
    seed_game(
        &test_app,
        "old_win",
        now - Duration::days(12),
        "completed",
        side(Some("team_sen"), "Mentone - Men's Vic League 1", Some(6)),
        side(None, "Hawthorn", Some(0)),
    );
    // Inside the window but not finished.
    seed_game(
        &test_app,
        "postponed",
        now - Duration::days(2),
        "scheduled",
        side(Some("team_sen"), "Mentone - Men's Vic League 1", None),
        side(None, "Doncaster", None),
    );

    let client = Client::new();
    let response = client
        .get(&format!("{}/summary/weekly", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["success"], true);

    let summary = &json_response["data"];
    assert_eq!(summary["total_games"], 2);

    let sections = summary["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["team_type"], "Senior");
    assert_eq!(sections[1]["team_type"], "Midweek/Masters");

    assert_eq!(sections[0]["games"][0]["game"]["id"], "senior_win");
    assert_eq!(sections[0]["games"][0]["result"], "win");
    assert_eq!(sections[1]["games"][0]["game"]["id"], "masters_loss");
    assert_eq!(sections[1]["games"][0]["result"], "loss");
}

#[tokio::test]
async fn weekly_summary_is_empty_when_nothing_was_played() {
    let test_app = spawn_app().await;
    seed_home_club(&test_app);
    seed_team(&test_app, "team_sen", "Mentone - Men's Vic League 1", "Senior", "Men");
    let client = Client::new();

    let response = client
        .get(&format!("{}/summary/weekly", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let json_response: Value = response.json().await.expect("Cannot parse response body.");
    assert_eq!(json_response["data"]["total_games"], 0);
    assert_eq!(
        json_response["data"]["sections"].as_array().unwrap().len(),
        0
    );
}
