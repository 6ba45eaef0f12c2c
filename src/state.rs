//! Shared application state injected into request handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::PgMappingRepository;

/// Application state constructed once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub base_url: String,
    pub mapping_service: Arc<MappingService<PgMappingRepository>>,
}

impl AppState {
    /// Wires the repository and service over a connection pool.
    pub fn new(pool: PgPool, base_url: String) -> Self {
        let repository = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));
        let mapping_service = Arc::new(MappingService::new(repository));

        Self {
            db: pool,
            base_url,
            mapping_service,
        }
    }
}
