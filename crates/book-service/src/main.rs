use std::sync::Arc;

use axum::{routing::get, Router};
use registrar::{DirectoryClient, Registrar};
use tower_http::trace::TraceLayer;

use book_service::{api, ServiceSettings};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = ServiceSettings::from_env();
    let descriptor = settings.descriptor();

    let registrar = Arc::new(Registrar::new(DirectoryClient::new(
        settings.discovery_address.clone(),
    )));

    // Registration failure costs discoverability, never startup.
    if let Err(e) = registrar.register(&descriptor).await {
        tracing::warn!("starting without discovery registration: {}", e);
    }

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/books", get(api::list_books))
        .route("/api/books/hostname", get(api::instance_hostname))
        .route("/api/books/{id}", get(api::get_book))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.service_port))
        .await
        .unwrap();
    tracing::info!(
        "{} listening on {}",
        settings.service_name,
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    registrar.shutdown().await;
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed listening for shutdown signal");
    tracing::info!("shutdown signal received");
}
