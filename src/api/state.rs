use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Movie;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// The catalog, in insertion order. Order is load-bearing: equally-scored
    /// recommendations keep their relative position here.
    pub catalog: Vec<Movie>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self::with_catalog(Vec::new())
    }

    /// Creates application state seeded with a catalog
    pub fn with_catalog(catalog: Vec<Movie>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner { catalog })),
        }
    }
}
