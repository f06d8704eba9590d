use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::config::settings::Settings;
use crate::services::SummaryService;
use crate::store::DocumentStore;

/// Weekly results rollup for the home club
#[tracing::instrument(name = "Get weekly summary", skip(store, config))]
pub async fn get_weekly_summary(
    store: web::Data<DocumentStore>,
    config: web::Data<Settings>,
) -> Result<HttpResponse> {
    let summary_service = SummaryService::new(
        store.get_ref().clone(),
        config.application.home_club.clone(),
    );

    match summary_service.weekly_summary().await {
        Ok(summary) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary
        }))),
        Err(e) => {
            tracing::error!("Failed to build weekly summary: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to build weekly summary"
            })))
        }
    }
}
