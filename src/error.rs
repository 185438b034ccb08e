//! Error types for the snippet service.
//!
//! Errors render as small self-contained HTML pages rather than
//! JSON, since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested snippet or page does not exist, or the snippet
    /// has expired.
    #[error("not found: {0}")]
    NotFound(String),

    /// SQL query or connection error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (rendering, startup, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("The requested page or snippet was not found: {msg}"),
            ),
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "The database is temporarily unavailable. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the latest snippets" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        let err = AppError::NotFound("snippet 42".to_string());
        assert_eq!(err.to_string(), "not found: snippet 42");
    }

    #[test]
    fn error_display_internal() {
        let err = AppError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_not_found() {
        let err = AppError::NotFound("snippet 7".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_internal() {
        let err = AppError::Internal(anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_into_response_database() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
