//! S3-compatible bucket storage provider.

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, info};

use hub_core::config::S3StorageConfig;
use hub_core::error::AppError;
use hub_core::result::AppResult;
use hub_core::traits::storage::{StorageProvider, StoredObject};

/// Writes uploads to an S3 bucket (AWS, MinIO, R2, ...).
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: Client,
    bucket: String,
    key_prefix: String,
    public_base: String,
}

impl S3StorageProvider {
    /// Build a client from the `[storage.s3]` section.
    ///
    /// Static credentials are used when both keys are configured; otherwise
    /// the default AWS credential chain applies.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket is required"));
        }
        info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = %config.endpoint,
            "Initializing S3 upload storage"
        );

        let region = Region::new(config.region.clone());
        let mut builder = if config.access_key.is_empty() || config.secret_key.is_empty() {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;
            aws_sdk_s3::config::Builder::from(&shared)
        } else {
            aws_sdk_s3::config::Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(Credentials::new(
                    config.access_key.clone(),
                    config.secret_key.clone(),
                    None,
                    None,
                    "hub-config",
                ))
        };
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(&config.endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            key_prefix: config.key_prefix.trim_matches('/').to_string(),
            public_base: public_base(config),
        })
    }

    fn object_key(&self, key: &str) -> String {
        let key = key.trim_start_matches('/');
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}/{key}", self.key_prefix)
        }
    }
}

/// Base URL objects are publicly reachable under.
fn public_base(config: &S3StorageConfig) -> String {
    if !config.public_base_url.is_empty() {
        config.public_base_url.trim_end_matches('/').to_string()
    } else if !config.endpoint.is_empty() {
        format!("{}/{}", config.endpoint.trim_end_matches('/'), config.bucket)
    } else {
        format!("https://{}.s3.{}.amazonaws.com", config.bucket, config.region)
    }
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok())
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<StoredObject> {
        let object_key = self.object_key(key);
        let size = data.len() as u64;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object_key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::storage(format!(
                    "Failed to upload '{object_key}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(key = %object_key, bytes = size, "Stored upload in bucket");
        Ok(StoredObject {
            key: object_key,
            url: self.public_url(key),
            size_bytes: size,
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, self.object_key(key))
    }
}
