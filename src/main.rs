//! Snipbin - minimal snippet pastebin HTTP server.
//!
//! Parses flags, opens the SQLite pool, bootstraps the schema, and
//! serves the snippet routes.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (0.0.0.0:8080, ./snipbin.db)
//! snipbin
//!
//! # Custom listen address and database
//! snipbin --addr 127.0.0.1:4000 --dsn "sqlite:/var/lib/snipbin/snippets.db?mode=rwc"
//! ```

use axum::http::Request;
use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use snipbin::{AppState, Args, Config, SnippetStore, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before flag parsing so env-var fallbacks see it
    let dotenv = std::env::var("DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    if std::path::Path::new(&dotenv).exists() {
        dotenvy::from_path(&dotenv)?;
        eprintln!("Loaded environment from {dotenv}");
    }

    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_args(&args)?;
    let addr = config.addr.clone();

    // Open the database pool and make sure the schema exists
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.dsn)
        .await?;
    let store = SnippetStore::new(pool);
    store.ensure_schema().await?;

    // Create application state
    let state = AppState::new(config, store);

    // Build router with middleware
    let app = router(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                query = request.uri().query().unwrap_or("")
            )
        }),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "starting snippet server");

    axum::serve(listener, app).await?;

    Ok(())
}
