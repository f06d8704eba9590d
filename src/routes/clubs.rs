use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::club_handler;
use crate::models::game::GamesLimitQuery;
use crate::store::DocumentStore;

/// List every registered club
#[get("/clubs")]
pub async fn get_clubs(store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    club_handler::get_clubs(store).await
}

/// Get one club by id
#[get("/clubs/{club_id}")]
pub async fn get_club(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let club_id = path.into_inner();
    club_handler::get_club(club_id, store).await
}

/// Club-wide season standings
#[get("/clubs/{club_id}/stats")]
pub async fn get_club_stats(
    path: web::Path<String>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let club_id = path.into_inner();
    club_handler::get_club_stats(club_id, store).await
}

/// Latest games across the whole club
#[get("/clubs/{club_id}/games")]
pub async fn get_club_games(
    path: web::Path<String>,
    query: web::Query<GamesLimitQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    let club_id = path.into_inner();
    club_handler::get_club_games(club_id, query, store).await
}
