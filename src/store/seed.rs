use chrono::{Duration, Utc};
use serde_json::json;

use crate::store::memory::MemoryStore;

/// Seed the in-memory backend with a small, self-consistent fixture set.
///
/// Demo mode serves this data when no Firestore project is reachable.
/// Dates are relative to now so the upcoming/recent feeds and the weekly
/// summary all have something to show.
pub fn seed_demo_data(store: &MemoryStore) {
    let now = Utc::now();

    store.insert(
        "clubs",
        json!({
            "id": "mentone",
            "name": "Mentone Hockey Club",
            "short_name": "Mentone",
            "is_home_club": true
        }),
    );

    store.insert(
        "competitions",
        json!({
            "id": "comp_10342",
            "comp_id": 10342,
            "name": "Men's Vic League 1 - 2025",
            "type": "Senior",
            "gender": "Men",
            "division": "Vic League 1",
            "season": "2025",
            "rounds": 18
        }),
    );
    store.insert(
        "competitions",
        json!({
            "id": "comp_10343",
            "comp_id": 10343,
            "name": "Women's Premier League - 2025",
            "type": "Senior",
            "gender": "Women",
            "division": "Premier League",
            "season": "2025",
            "rounds": 18
        }),
    );
    store.insert(
        "competitions",
        json!({
            "id": "comp_10410",
            "comp_id": 10410,
            "name": "Men's Masters 35+ - 2025",
            "type": "Midweek/Masters",
            "gender": "Men",
            "division": "Masters 35+",
            "season": "2025",
            "rounds": 14
        }),
    );

    store.insert(
        "teams",
        json!({
            "id": "team_37291",
            "name": "Mentone - Men's Vic League 1",
            "fixture_id": 37291,
            "comp_id": 10342,
            "type": "Senior",
            "gender": "Men",
            "season": "2025",
            "club": "mentone"
        }),
    );
    store.insert(
        "teams",
        json!({
            "id": "team_37354",
            "name": "Mentone - Women's Premier League",
            "fixture_id": 37354,
            "comp_id": 10343,
            "type": "Senior",
            "gender": "Women",
            "season": "2025",
            "club": "mentone"
        }),
    );
    store.insert(
        "teams",
        json!({
            "id": "team_37410",
            "name": "Mentone - Men's Masters 35+",
            "fixture_id": 37410,
            "comp_id": 10410,
            "type": "Midweek/Masters",
            "gender": "Men",
            "season": "2025",
            "club": "mentone"
        }),
    );

    // Two completed rounds inside the weekly window, one older result,
    // and upcoming fixtures for each squad.
    store.insert(
        "games",
        json!({
            "id": "game_37291_3",
            "fixture_id": 37291,
            "round": 3,
            "date": (now - Duration::days(2)).to_rfc3339(),
            "venue": "Mentone Grammar Playing Fields",
            "status": "completed",
            "home_team": { "id": "team_37291", "club": "mentone", "name": "Mentone - Men's Vic League 1", "score": 3 },
            "away_team": { "name": "Camberwell - Men's Vic League 1", "score": 1 }
        }),
    );
    store.insert(
        "games",
        json!({
            "id": "game_37354_3",
            "fixture_id": 37354,
            "round": 3,
            "date": (now - Duration::days(3)).to_rfc3339(),
            "venue": "State Netball Hockey Centre",
            "status": "completed",
            "home_team": { "name": "Footscray - Women's Premier League", "score": 2 },
            "away_team": { "id": "team_37354", "club": "mentone", "name": "Mentone - Women's Premier League", "score": 2 }
        }),
    );
    store.insert(
        "games",
        json!({
            "id": "game_37291_2",
            "fixture_id": 37291,
            "round": 2,
            "date": (now - Duration::days(9)).to_rfc3339(),
            "venue": "Mentone Grammar Playing Fields",
            "status": "completed",
            "home_team": { "id": "team_37291", "club": "mentone", "name": "Mentone - Men's Vic League 1", "score": 1 },
            "away_team": { "name": "Hawthorn - Men's Vic League 1", "score": 4 }
        }),
    );
    store.insert(
        "games",
        json!({
            "id": "game_37291_4",
            "fixture_id": 37291,
            "round": 4,
            "date": (now + Duration::days(5)).to_rfc3339(),
            "venue": "Mentone Grammar Playing Fields",
            "status": "scheduled",
            "home_team": { "id": "team_37291", "club": "mentone", "name": "Mentone - Men's Vic League 1" },
            "away_team": { "name": "Greensborough - Men's Vic League 1" }
        }),
    );
    store.insert(
        "games",
        json!({
            "id": "game_37354_4",
            "fixture_id": 37354,
            "round": 4,
            "date": (now + Duration::days(6)).to_rfc3339(),
            "venue": "State Netball Hockey Centre",
            "status": "scheduled",
            "home_team": { "name": "Doncaster - Women's Premier League" },
            "away_team": { "id": "team_37354", "club": "mentone", "name": "Mentone - Women's Premier League" }
        }),
    );
    store.insert(
        "games",
        json!({
            "id": "game_37410_3",
            "fixture_id": 37410,
            "round": 3,
            "date": (now + Duration::days(3)).to_rfc3339(),
            "venue": "Mentone Grammar Playing Fields",
            "status": "scheduled",
            "home_team": { "id": "team_37410", "club": "mentone", "name": "Mentone - Men's Masters 35+" },
            "away_team": { "name": "Frankston - Men's Masters 35+" }
        }),
    );

    for (id, name, team, goals, appearances) in [
        ("player_37291_1", "James Smith", "team_37291", 7, 3),
        ("player_37291_2", "Daniel Taylor", "team_37291", 2, 3),
        ("player_37354_1", "Sarah Miller", "team_37354", 5, 3),
        ("player_37354_2", "Emma Taylor", "team_37354", 0, 2),
        ("player_37410_1", "Robert Jones", "team_37410", 1, 2),
    ] {
        store.insert(
            "players",
            json!({
                "id": id,
                "name": name,
                "teams": [team],
                "primary_team_id": team,
                "gender": if team == "team_37354" { "Women" } else { "Men" },
                "stats": {
                    "goals": goals,
                    "appearances": appearances,
                    "green_cards": 0,
                    "yellow_cards": 0,
                    "red_cards": 0
                }
            }),
        );
    }

    tracing::info!("Seeded demo fixtures for the Mentone dashboard");
}
