use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::game::GamesFeedQuery;
use crate::services::GameService;
use crate::store::DocumentStore;

/// Upcoming fixtures, soonest first
#[tracing::instrument(
    name = "Get upcoming games",
    skip(query, store),
    fields(
        query = %query
    )
)]
pub async fn get_upcoming_games(
    query: web::Query<GamesFeedQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let game_service = GameService::new(store.get_ref().clone());

    match game_service.get_upcoming_games(&query).await {
        Ok(games) => {
            tracing::info!("Successfully retrieved {} upcoming games", games.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": games,
                "total_count": games.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get upcoming games: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve upcoming games"
            })))
        }
    }
}

/// Completed fixtures, newest first
#[tracing::instrument(
    name = "Get recent results",
    skip(query, store),
    fields(
        query = %query
    )
)]
pub async fn get_recent_results(
    query: web::Query<GamesFeedQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let game_service = GameService::new(store.get_ref().clone());

    match game_service.get_recent_results(&query).await {
        Ok(games) => {
            tracing::info!("Successfully retrieved {} results", games.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": games,
                "total_count": games.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get recent results: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve recent results"
            })))
        }
    }
}
