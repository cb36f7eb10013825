//! S3 provider. MinIO and other S3-compatible services use the same client
//! with a custom endpoint and path-style addressing.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use ngocms_core::media::validate_object_key;

use crate::config::S3Settings;
use crate::{join_url, StorageError, StorageProvider, StoredObject};

pub struct S3Provider {
    client: Client,
    bucket: String,
    public_base_url: String,
    name: &'static str,
}

impl S3Provider {
    pub async fn new(settings: S3Settings) -> Self {
        let region = Region::new(settings.region.clone());
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let (Some(access_key), Some(secret_key)) =
            (&settings.access_key_id, &settings.secret_access_key)
        {
            builder = builder.credentials_provider(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "ngocms-env",
            ));
        }
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint.clone()).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            public_base_url: public_base_url(&settings),
            name: if settings.endpoint.is_some() { "minio" } else { "s3" },
            bucket: settings.bucket,
        }
    }
}

/// The URL prefix objects are served from.
fn public_base_url(settings: &S3Settings) -> String {
    if let Some(base) = &settings.public_base_url {
        return base.trim_end_matches('/').to_string();
    }
    match &settings.endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), settings.bucket),
        None => format!("https://{}.s3.{}.amazonaws.com", settings.bucket, settings.region),
    }
}

#[async_trait]
impl StorageProvider for S3Provider {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        validate_object_key(key).map_err(|_| StorageError::InvalidKey(key.to_string()))?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Stored object in S3");
        Ok(StoredObject {
            key: key.to_string(),
            url: self.url_for(key),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        validate_object_key(key).map_err(|_| StorageError::InvalidKey(key.to_string()))?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    fn url_for(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
