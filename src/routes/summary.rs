use actix_web::{get, web, HttpResponse, Result};

use crate::config::settings::Settings;
use crate::handlers::summary_handler;
use crate::store::DocumentStore;

/// Weekly results rollup for the home club
#[get("/summary/weekly")]
pub async fn get_weekly_summary(
    store: web::Data<DocumentStore>,
    config: web::Data<Settings>,
) -> Result<HttpResponse> {
    summary_handler::get_weekly_summary(store, config).await
}
