//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::BusinessService;

/// State shared by all request handlers.
///
/// Holds the single process-wide service (and through it the store handle)
/// created at startup. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub business_service: Arc<BusinessService>,
}

impl AppState {
    pub fn new(business_service: Arc<BusinessService>) -> Self {
        Self { business_service }
    }
}
