//! Shared application state for all routes.

use crate::store::MediaStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MediaStore>,
}

impl AppState {
    pub fn new(store: impl MediaStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
