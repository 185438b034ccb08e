//! Snippet creation.
//!
//! `POST /snippet/create` inserts a snippet and redirects to its view
//! page with 303 See Other. The method router answers anything but
//! POST with 405 and an `Allow: POST` header.

use axum::extract::State;
use axum::response::Redirect;

use crate::error::AppError;
use crate::state::AppState;

// Fixed payload until the create form exists.
const DUMMY_TITLE: &str = "O snail";
const DUMMY_CONTENT: &str = "O snail\nClimb Mount Fuji,\nBut slowly, slowly!\n\n- Kobayashi Issa";
const DUMMY_EXPIRES_DAYS: i64 = 7;

/// Insert a snippet and redirect to its view URL.
pub async fn snippet_create(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let id = state
        .store
        .insert(DUMMY_TITLE, DUMMY_CONTENT, DUMMY_EXPIRES_DAYS)
        .await?;

    tracing::info!(id, "snippet created");

    Ok(Redirect::to(&format!("/snippet/view?id={id}")))
}
