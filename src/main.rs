// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod images;
mod queries;
mod state;
mod dtos;
mod error;

use axum::{extract::DefaultBodyLimit, Router};
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};
use dotenvy::dotenv;
use std::net::{SocketAddr, IpAddr};
use std::path::PathBuf;

// Uploads above this size are rejected by the framework.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Database file lives relative to the working directory
    let db_path = PathBuf::from(
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "products.db".to_string()),
    );
    let db_pool = database::create_pool(&db_path).await
        .expect("Failed to create database pool");
    database::ensure_schema(&db_pool).await
        .expect("Failed to ensure database schema");

    // Static file tree; uploaded images land under <wwwroot>/images
    let wwwroot = PathBuf::from(
        std::env::var("WWWROOT").unwrap_or_else(|_| "wwwroot".to_string()),
    );
    let images_dir = wwwroot.join("images");

    // Create application state
    let app_state = state::AppState::new(db_pool, images_dir);

    // API routes at the root, static assets (index.html, /images/*) as fallback
    let app = Router::new()
        .merge(routes::create_router())
        .fallback_service(ServeDir::new(&wwwroot))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server (axum 0.8 style) with HOST/PORT env and graceful port selection
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let base_port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(3000);

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
