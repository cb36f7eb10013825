//! Object storage for uploaded media.
//!
//! A [`StorageProvider`] stores bytes under a key such as
//! `banners/3f2a....png` and returns the public URL the site should embed.
//! Providers: S3 (and S3-compatible MinIO) and the local filesystem.

use std::sync::Arc;

use async_trait::async_trait;

pub mod config;
pub mod local;
pub mod s3;

pub use config::{StorageBackend, StorageConfig};
pub use local::LocalProvider;
pub use s3::S3Provider;

/// Errors raised by storage providers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Storage misconfigured: {0}")]
    Config(String),
}

/// An object that has been written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Write `bytes` under `key`, replacing any existing object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Remove the object at `key`. Deleting a missing object is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL for `key`.
    fn url_for(&self, key: &str) -> String;

    /// Short backend name reported by the health endpoint.
    fn name(&self) -> &'static str;
}

/// Build the provider selected by `config`.
pub async fn build_provider(
    config: &StorageConfig,
) -> Result<Arc<dyn StorageProvider>, StorageError> {
    let provider: Arc<dyn StorageProvider> = match &config.backend {
        StorageBackend::Local { root, base_url } => {
            Arc::new(LocalProvider::new(root.clone(), base_url.clone()).await?)
        }
        StorageBackend::S3(s3) => Arc::new(S3Provider::new(s3.clone()).await),
    };
    tracing::info!(backend = provider.name(), "Storage provider ready");
    Ok(provider)
}

/// Join a base URL and a key with exactly one slash between them.
pub(crate) fn join_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}
