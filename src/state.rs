//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::SnippetStore;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snippet persistence handle.
    pub store: SnippetStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Config, store: SnippetStore) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
