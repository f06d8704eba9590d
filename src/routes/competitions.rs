use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::team_handler;
use crate::store::DocumentStore;

/// List the competition catalogue
#[get("/competitions")]
pub async fn get_competitions(store: web::Data<DocumentStore>) -> Result<HttpResponse> {
    team_handler::get_competitions(store).await
}
