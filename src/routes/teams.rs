use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::team_handler;
use crate::models::game::GamesLimitQuery;
use crate::models::team::TeamsQuery;
use crate::store::DocumentStore;

/// List teams with optional filters
#[get("/teams")]
pub async fn get_teams(
    query: web::Query<TeamsQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    team_handler::get_teams(query, store).await
}

/// Get one team by id
#[get("/teams/{team_id}")]
pub async fn get_team(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team(team_id, store).await
}

/// Season standings for one team
#[get("/teams/{team_id}/stats")]
pub async fn get_team_stats(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team_stats(team_id, store).await
}

/// Latest games for one team
#[get("/teams/{team_id}/games")]
pub async fn get_team_games(
    path: web::Path<String>,
    query: web::Query<GamesLimitQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team_games(team_id, query, store).await
}
