//! Shared application state.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::store::ProductStore;

/// State handed to every middleware stage and handler.
///
/// Cloned once per request; every field is an `Arc`. Tests build isolated
/// instances with their own store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(store: ProductStore, auth: AuthConfig) -> Self {
        Self { store: Arc::new(store), auth: Arc::new(auth) }
    }
}
