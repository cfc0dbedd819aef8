use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_match, create_player, spawn_app};

#[tokio::test]
async fn create_player_returns_201_and_persists() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/players", app.address))
        .json(&json!({ "name": "  Virat  " }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Virat");

    let saved: (String,) = sqlx::query_as("SELECT name FROM players")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved player");
    assert_eq!(saved.0, "Virat");
}

#[tokio::test]
async fn create_player_rejects_empty_name() {
    let app = spawn_app().await;
    let client = Client::new();

    for body in [json!({ "name": "" }), json!({ "name": "   " }), json!({})] {
        let response = client
            .post(format!("{}/players", app.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(400, response.status().as_u16(), "body: {}", body);
    }
}

#[tokio::test]
async fn list_players_is_name_sorted() {
    let app = spawn_app().await;
    let client = Client::new();

    create_player(&app.address, "Rohit").await;
    create_player(&app.address, "Anil").await;
    create_player(&app.address, "Mithali").await;

    let response = client
        .get(format!("{}/players", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let players: Vec<serde_json::Value> = response.json().await.unwrap();
    let names: Vec<&str> = players.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Anil", "Mithali", "Rohit"]);
}

#[tokio::test]
async fn get_unknown_player_returns_404() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/players/{}", app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn player_detail_returns_history_and_totals() {
    let app = spawn_app().await;
    let client = Client::new();

    let player_id = create_player(&app.address, "Kapil").await;

    // Two matches, the June one more recent than the May one
    create_match(
        &app.address,
        json!({
            "match_date": "2025-05-10",
            "match_name": "vs Northside",
            "batting_stats": [
                { "player_id": player_id, "runs": 20, "balls_faced": 15, "fours": 2, "sixes": 0 }
            ],
            "bowling_stats": [
                { "player_id": player_id, "wickets": 2, "runs_conceded": 30, "overs": 5.0 }
            ]
        }),
    )
    .await;
    create_match(
        &app.address,
        json!({
            "match_date": "2025-06-01",
            "batting_stats": [
                { "player_id": player_id, "runs": 10, "fours": 1, "sixes": 1 }
            ],
            "bowling_stats": []
        }),
    )
    .await;

    let response = client
        .get(format!("{}/players/{}", app.address, player_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Kapil");

    // Most recent match first
    let batting_history = body["batting"]["history"].as_array().unwrap();
    assert_eq!(batting_history.len(), 2);
    assert_eq!(batting_history[0]["match_date"], "2025-06-01");
    assert_eq!(batting_history[1]["match_date"], "2025-05-10");
    assert_eq!(batting_history[1]["match_name"], "vs Northside");

    // Totals: runs 30, fours 3, sixes 1, points (20+2) + (10+1+2) = 35
    let batting_totals = &body["batting"]["totals"];
    assert_eq!(batting_totals["total_runs"], 30);
    assert_eq!(batting_totals["total_fours"], 3);
    assert_eq!(batting_totals["total_sixes"], 1);
    assert_eq!(batting_totals["total_points"], 35);
    assert_eq!(batting_totals["matches_played"], 2);

    // Bowling: one spell, 2 wickets at economy 6.0 -> 20 + 5
    let bowling_totals = &body["bowling"]["totals"];
    assert_eq!(bowling_totals["total_wickets"], 2);
    assert_eq!(bowling_totals["total_points"], 25);
    assert_eq!(bowling_totals["matches_played"], 1);
}

#[tokio::test]
async fn player_detail_with_no_stats_has_zero_totals() {
    let app = spawn_app().await;
    let client = Client::new();

    let player_id = create_player(&app.address, "Newcomer").await;

    let response = client
        .get(format!("{}/players/{}", app.address, player_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["batting"]["history"].as_array().unwrap().is_empty());
    assert_eq!(body["batting"]["totals"]["total_points"], 0);
    assert_eq!(body["batting"]["totals"]["matches_played"], 0);
    assert_eq!(body["bowling"]["totals"]["total_points"], 0);
}
