//! Snipbin - a minimal snippet pastebin.
//!
//! Serves HTML pages for creating and viewing short text snippets
//! stored in a SQLite `snippets` table.
//!
//! # Architecture
//!
//! - **Store**: parameterized SQL against the `snippets` table,
//!   mapped to [`store::Snippet`] rows
//! - **Routes**: axum handlers for the home list, single-snippet
//!   view, creation, static assets, and a health probe
//! - **Render**: maud compile-time templates composed into a shared
//!   page shell
//!
//! Expired snippets are never served: every read filters on the
//! `expires` column.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Args, Config};
pub use routes::router;
pub use state::AppState;
pub use store::SnippetStore;
