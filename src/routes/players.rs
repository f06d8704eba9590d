use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::player_handler;
use crate::models::player::TopScorersQuery;
use crate::store::DocumentStore;

/// Scorer board above a goal threshold
#[get("/players")]
pub async fn get_top_scorers(
    query: web::Query<TopScorersQuery>,
    store: web::Data<DocumentStore>,
) -> Result<HttpResponse> {
    player_handler::get_top_scorers(query, store).await
}
