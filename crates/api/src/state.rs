use std::sync::Arc;

use ngocms_events::EmailQueue;
use ngocms_storage::StorageProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ngocms_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Upload target (S3, MinIO, or local disk).
    pub storage: Arc<dyn StorageProvider>,
    /// Outgoing email; sending never blocks a request.
    pub email: EmailQueue,
}
