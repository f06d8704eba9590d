use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::game::GamesLimitQuery;
use crate::services::ClubService;
use crate::store::DocumentStore;

/// List every registered club
#[tracing::instrument(name = "Get clubs", skip(store))]
pub async fn get_clubs(store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    let club_service = ClubService::new(store.get_ref().clone());

    match club_service.get_clubs().await {
        Ok(clubs) => {
            tracing::info!("Successfully retrieved {} clubs", clubs.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": clubs,
                "total_count": clubs.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get clubs: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve clubs"
            })))
        }
    }
}

/// Get one club by id
#[tracing::instrument(
    name = "Get club",
    skip(store),
    fields(
        club_id = %club_id
    )
)]
pub async fn get_club(club_id: String, store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    let club_service = ClubService::new(store.get_ref().clone());

    match club_service.get_club(&club_id).await {
        Ok(Some(club)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": club
        }))),
        Ok(None) => {
            tracing::warn!("Club {} not found", club_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Club not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get club {}: {}", club_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve club"
            })))
        }
    }
}

/// Club-wide season standings
#[tracing::instrument(
    name = "Get club stats",
    skip(store),
    fields(
        club_id = %club_id
    )
)]
pub async fn get_club_stats(
    club_id: String,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let club_service = ClubService::new(store.get_ref().clone());

    match club_service.get_club_stats(&club_id).await {
        Ok(Some(stats)) => {
            tracing::info!(
                "Club {} stats cover {} games",
                club_id,
                stats.games_played
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": stats
            })))
        }
        Ok(None) => {
            tracing::warn!("Club {} not found", club_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Club not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get club {} stats: {}", club_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve club stats"
            })))
        }
    }
}

/// Latest games across the whole club
#[tracing::instrument(
    name = "Get club games",
    skip(query, store),
    fields(
        club_id = %club_id,
        limit = ?query.limit
    )
)]
pub async fn get_club_games(
    club_id: String,
    query: web::Query<GamesLimitQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let club_service = ClubService::new(store.get_ref().clone());

    match club_service.get_club_games(&club_id, query.limit).await {
        Ok(Some(games)) => {
            tracing::info!("Retrieved {} games for club {}", games.len(), club_id);
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": games,
                "total_count": games.len()
            })))
        }
        Ok(None) => {
            tracing::warn!("Club {} not found", club_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Club not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get club {} games: {}", club_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve club games"
            })))
        }
    }
}
