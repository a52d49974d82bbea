mod api;
mod auth;
mod config;
mod db;
mod state;

use state::AppState;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load settings
    let settings = config::Settings::new().expect("Failed to load settings");

    // Initialize database
    let db = db::Database::new(&settings.database.path).expect("Failed to create database");

    db.initialize()
        .expect("Failed to initialize database schema");

    // Fill a fresh database with the demo portfolio content
    db.seed_demo_data().expect("Failed to seed demo data");

    tracing::info!("Database initialized successfully");

    // Create application state
    let state = AppState::new(db);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let mut app = api::router(state);

    // Serve the built frontend when it is present; unknown paths get
    // index.html so client-side routing keeps working
    let static_dir = Path::new(&settings.server.static_dir);
    if static_dir.is_dir() {
        tracing::info!("Serving static files from {}", static_dir.display());
        let serve_dir =
            ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));
        app = app.fallback_service(serve_dir);
    }

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .expect("Failed to parse server address");
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
