use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
mod handlers;
pub mod models;
mod routes;
pub mod services;
pub mod stats;
pub mod store;
pub mod telemetry;
pub mod utils;

use crate::config::settings::Settings;
use crate::routes::init_routes;
use crate::store::DocumentStore;

pub fn run(
    listener: TcpListener,
    store: DocumentStore,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data = web::Data::new(store);
    let settings_data = web::Data::new(settings);

    let server = HttpServer::new(move || {
        // Read-only API: the dashboard only ever issues GETs
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_origin("https://mentone-dashboard.web.app")
            .allowed_origin("https://mentone-dashboard.firebaseapp.com")
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(store_data.clone())
            .app_data(settings_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
