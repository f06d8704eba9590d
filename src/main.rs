use std::net::TcpListener;

use mentone_backend::config::settings::get_config;
use mentone_backend::run;
use mentone_backend::store::seed::seed_demo_data;
use mentone_backend::store::{DocumentStore, FirestoreClient, MemoryStore};
use mentone_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "mentone-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let store = if config.firestore.demo_mode {
        let memory = MemoryStore::new();
        seed_demo_data(&memory);
        tracing::info!("🏑 Demo mode: serving seeded fixtures from memory");
        DocumentStore::Memory(memory)
    } else {
        match FirestoreClient::new(
            config.firestore.endpoint.clone(),
            config.firestore.project_id.clone(),
            config.firestore.database_id.clone(),
            config.firestore.api_key.clone(),
        ) {
            Ok(client) => {
                tracing::info!(
                    "Firestore client ready for project {}",
                    config.firestore.project_id
                );
                DocumentStore::Firestore(client)
            }
            Err(e) => {
                tracing::error!("Failed to create Firestore client: {}", e);
                eprintln!("Failed to create Firestore client: {}", e);
                eprintln!("Check the firestore endpoint and project id settings.");
                std::process::exit(1);
            }
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("🏑 Mentone dashboard backend listening on {}", address);

    run(listener, store, config)?.await
}
