//! Single-snippet view page.
//!
//! Handles `GET /snippet/view?id=<int>`. Anything that does not name
//! a positive integer id is treated as not found, never as a server
//! error.

use axum::extract::{Query, State};
use maud::Markup;
use serde::Deserialize;

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

/// Query parameters for the view page.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewParams {
    /// Snippet id, exactly as given in the URL.
    pub id: Option<String>,
}

/// Fetch and render one snippet.
pub async fn snippet_view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Markup, AppError> {
    let raw = params.id.unwrap_or_default();
    let id = raw
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AppError::NotFound(format!("snippet id {raw:?}")))?;

    let snippet = state.store.get(id).await?;
    Ok(render::snippet_page(&snippet, &state.config.site_name))
}
