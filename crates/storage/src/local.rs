//! Local filesystem provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ngocms_core::media::validate_object_key;
use tokio::fs;

use crate::{join_url, StorageError, StorageProvider, StoredObject};

#[derive(Debug, Clone)]
pub struct LocalProvider {
    root: PathBuf,
    base_url: String,
}

impl LocalProvider {
    /// Create the provider, creating `root` if it does not exist yet.
    pub async fn new(root: PathBuf, base_url: String) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).await?;
        Ok(Self { root, base_url })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_object_key(key).map_err(|_| StorageError::InvalidKey(key.to_string()))?;
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl StorageProvider for LocalProvider {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        tracing::debug!(key, path = %path.display(), "Stored object on local disk");
        Ok(StoredObject {
            key: key.to_string(),
            url: self.url_for(key),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn url_for(&self, key: &str) -> String {
        join_url(&self.base_url, key)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    async fn provider() -> (tempfile::TempDir, LocalProvider) {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalProvider::new(dir.path().join("uploads"), "/media".into())
            .await
            .unwrap();
        (dir, provider)
    }

    #[tokio::test]
    async fn put_writes_file_and_returns_url() {
        let (_dir, provider) = provider().await;
        let stored = provider
            .put("banners/a.png", b"png-bytes".to_vec(), "image/png")
            .await
            .unwrap();

        assert_eq!(stored.url, "/media/banners/a.png");
        let on_disk = fs::read(provider.root().join("banners/a.png")).await.unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_dir, provider) = provider().await;
        provider.put("docs/r.pdf", vec![1, 2, 3], "application/pdf").await.unwrap();

        provider.delete("docs/r.pdf").await.unwrap();
        assert!(!provider.root().join("docs/r.pdf").exists());
        provider.delete("docs/r.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_traversal_keys() {
        let (_dir, provider) = provider().await;
        assert_matches!(
            provider.put("../escape.png", vec![1], "image/png").await,
            Err(StorageError::InvalidKey(_))
        );
        assert_matches!(
            provider.delete("/etc/passwd").await,
            Err(StorageError::InvalidKey(_))
        );
    }
}
