//! Home page listing the latest snippets.

use axum::extract::State;
use maud::Markup;

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

/// Render the home page from the newest unexpired snippets.
///
/// The router matches `/` exactly; every other unmatched path falls
/// through to the 404 fallback.
pub async fn home_page(State(state): State<AppState>) -> Result<Markup, AppError> {
    let snippets = state.store.latest().await?;
    Ok(render::home_page(&snippets, &state.config.site_name))
}
