use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::game_handler;
use crate::models::game::GamesFeedQuery;
use crate::store::DocumentStore;

/// Upcoming fixtures, optionally scoped to a team id list
#[get("/games/upcoming")]
pub async fn get_upcoming_games(
    query: web::Query<GamesFeedQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    game_handler::get_upcoming_games(query, store).await
}

/// Completed fixtures, optionally scoped to a team id list
#[get("/games/results")]
pub async fn get_recent_results(
    query: web::Query<GamesFeedQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    game_handler::get_recent_results(query, store).await
}
