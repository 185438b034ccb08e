//! Route definitions for the snippet service.
//!
//! ## Routes
//!
//! - `GET /` - Home page listing the latest snippets
//! - `GET /snippet/view?id=<int>` - One snippet
//! - `POST /snippet/create` - Create a snippet, redirect to it
//! - `GET /static/*` - Static assets
//! - `GET /health` - Health check (JSON)

mod create;
mod health;
mod home;
mod view;

use axum::Router;
use axum::http::Uri;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::state::AppState;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/snippet/view", get(view::snippet_view))
        .route("/snippet/create", post(create::snippet_create))
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .with_state(state)
}

/// Any path without a route gets the HTML 404 page.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no page at {}", uri.path()))
}
