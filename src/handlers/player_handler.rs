use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::player::TopScorersQuery;
use crate::services::PlayerService;
use crate::store::DocumentStore;

/// Scorer board above a goal threshold
#[tracing::instrument(
    name = "Get top scorers",
    skip(query, store),
    fields(
        query = %query
    )
)]
pub async fn get_top_scorers(
    query: web::Query<TopScorersQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let player_service = PlayerService::new(store.get_ref().clone());

    match player_service.get_top_scorers(&query).await {
        Ok(players) => {
            tracing::info!("Successfully retrieved {} players", players.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": players,
                "total_count": players.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get top scorers: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve top scorers"
            })))
        }
    }
}
