//! Storage configuration loaded from environment variables.

use std::path::PathBuf;

use crate::StorageError;

/// Default directory for the local provider.
const DEFAULT_LOCAL_ROOT: &str = "./uploads";

/// Default public prefix under which the API serves local uploads.
const DEFAULT_LOCAL_BASE_URL: &str = "/media";

/// Default AWS region when `S3_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

/// Settings for the S3 / MinIO provider.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint (MinIO). Enables path-style addressing.
    pub endpoint: Option<String>,
    /// Overrides the URL prefix returned for stored objects (e.g. a CDN).
    pub public_base_url: Option<String>,
    /// Static credentials. When absent the default AWS credential chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

#[derive(Debug, Clone)]
pub enum StorageBackend {
    Local { root: PathBuf, base_url: String },
    S3(S3Settings),
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Load from `STORAGE_BACKEND` (`local` | `s3` | `minio`) and friends.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let kind = get("STORAGE_BACKEND").unwrap_or_else(|| "local".to_string());

        let backend = match kind.to_ascii_lowercase().as_str() {
            "local" => StorageBackend::Local {
                root: PathBuf::from(
                    get("LOCAL_STORAGE_ROOT").unwrap_or_else(|| DEFAULT_LOCAL_ROOT.to_string()),
                ),
                base_url: get("LOCAL_STORAGE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_LOCAL_BASE_URL.to_string()),
            },
            kind @ ("s3" | "minio") => {
                let bucket = get("S3_BUCKET").ok_or_else(|| {
                    StorageError::Config("S3_BUCKET is required for s3/minio storage".into())
                })?;
                let endpoint = get("S3_ENDPOINT");
                if kind == "minio" && endpoint.is_none() {
                    return Err(StorageError::Config(
                        "S3_ENDPOINT is required for minio storage".into(),
                    ));
                }
                StorageBackend::S3(S3Settings {
                    bucket,
                    region: get("S3_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                    endpoint,
                    public_base_url: get("S3_PUBLIC_BASE_URL"),
                    access_key_id: get("S3_ACCESS_KEY_ID"),
                    secret_access_key: get("S3_SECRET_ACCESS_KEY"),
                })
            }
            other => {
                return Err(StorageError::Config(format!(
                    "Unknown STORAGE_BACKEND '{other}'. Must be one of: local, s3, minio"
                )))
            }
        };
        Ok(Self { backend })
    }

    /// Root directory served at `/media` when the local provider is active.
    pub fn local_root(&self) -> Option<&PathBuf> {
        match &self.backend {
            StorageBackend::Local { root, .. } => Some(root),
            StorageBackend::S3(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<StorageConfig, StorageError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorageConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_to_local() {
        let cfg = config(&[]).unwrap();
        assert_matches!(
            cfg.backend,
            StorageBackend::Local { ref root, ref base_url }
                if root == &PathBuf::from("./uploads") && base_url == "/media"
        );
        assert!(cfg.local_root().is_some());
    }

    #[test]
    fn s3_requires_bucket() {
        assert_matches!(config(&[("STORAGE_BACKEND", "s3")]), Err(StorageError::Config(_)));
    }

    #[test]
    fn minio_requires_endpoint() {
        assert_matches!(
            config(&[("STORAGE_BACKEND", "minio"), ("S3_BUCKET", "media")]),
            Err(StorageError::Config(_))
        );
        let cfg = config(&[
            ("STORAGE_BACKEND", "MinIO"),
            ("S3_BUCKET", "media"),
            ("S3_ENDPOINT", "http://localhost:9000"),
        ])
        .unwrap();
        assert_matches!(cfg.backend, StorageBackend::S3(ref s) if s.region == "us-east-1");
        assert!(cfg.local_root().is_none());
    }

    #[test]
    fn rejects_unknown_backend() {
        assert_matches!(
            config(&[("STORAGE_BACKEND", "cloudinary")]),
            Err(StorageError::Config(msg)) if msg.contains("cloudinary")
        );
    }
}
