use std::sync::Arc;

use inventory_db::repositories::{ProductRepo, UserRepo};
use inventory_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, also held by each repository.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub users: UserRepo,
    pub products: ProductRepo,
}

impl AppState {
    /// Wire both repositories to `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            users: UserRepo::new(pool.clone()),
            products: ProductRepo::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
