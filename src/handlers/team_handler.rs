use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::game::GamesLimitQuery;
use crate::models::team::TeamsQuery;
use crate::services::TeamService;
use crate::store::DocumentStore;

/// List teams with optional bracket, gender, and competition filters
#[tracing::instrument(
    name = "Get teams",
    skip(query, store),
    fields(
        query = %query
    )
)]
pub async fn get_teams(
    query: web::Query<TeamsQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.get_teams(&query).await {
        Ok(teams) => {
            tracing::info!("Successfully retrieved {} teams", teams.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": teams,
                "total_count": teams.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get teams: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve teams"
            })))
        }
    }
}

/// Get one team by id
#[tracing::instrument(
    name = "Get team",
    skip(store),
    fields(
        team_id = %team_id
    )
)]
pub async fn get_team(team_id: String, store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.get_team(&team_id).await {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": team
        }))),
        Ok(None) => {
            tracing::warn!("Team {} not found", team_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Team not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve team"
            })))
        }
    }
}

/// Season standings for one team
#[tracing::instrument(
    name = "Get team stats",
    skip(store),
    fields(
        team_id = %team_id
    )
)]
pub async fn get_team_stats(
    team_id: String,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.get_team_stats(&team_id).await {
        Ok(Some(stats)) => {
            tracing::info!(
                "Team {} stats cover {} games",
                team_id,
                stats.games_played
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": stats
            })))
        }
        Ok(None) => {
            tracing::warn!("Team {} not found", team_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Team not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get team {} stats: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve team stats"
            })))
        }
    }
}

/// Latest games for one team
#[tracing::instrument(
    name = "Get team games",
    skip(query, store),
    fields(
        team_id = %team_id,
        limit = ?query.limit
    )
)]
pub async fn get_team_games(
    team_id: String,
    query: web::Query<GamesLimitQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.get_team_games(&team_id, query.limit).await {
        Ok(Some(games)) => {
            tracing::info!("Retrieved {} games for team {}", games.len(), team_id);
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": games,
                "total_count": games.len()
            })))
        }
        Ok(None) => {
            tracing::warn!("Team {} not found", team_id);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Team not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get team {} games: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve team games"
            })))
        }
    }
}

/// List the competition catalogue
#[tracing::instrument(name = "Get competitions", skip(store))]
pub async fn get_competitions(store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.get_competitions().await {
        Ok(competitions) => {
            tracing::info!("Successfully retrieved {} competitions", competitions.len());
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": competitions,
                "total_count": competitions.len()
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get competitions: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve competitions"
            })))
        }
    }
}
