use std::sync::Arc;

use crate::config::Config;
use crate::recommend::catalog::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Source of candidate profiles and active jobs. Postgres in production.
    pub catalog: Arc<dyn Catalog>,
    pub recommendation_limit: usize,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, config: &Config) -> Self {
        Self {
            catalog,
            recommendation_limit: config.recommendation_limit,
        }
    }
}
