#![doc = "S3 implementation of the core ObjectStore contract."]
//
//! # Uploader Integration (CLI <-> Core)
//!
//! Bridges [`snapbucket_core::contract::ObjectStore`] to the AWS SDK. The
//! client is built from the resolved config: region always, endpoint only for
//! S3-compatible services. Retries are disabled: a put is a single attempt.
//! Credentials come from the usual AWS chain
//! (environment, profile, instance metadata) and are resolved lazily on the
//! first request.

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use snapbucket_core::config::Config;
use snapbucket_core::contract::{BoxError, ObjectStore, PutObjectRequest};

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub async fn from_config(config: &Config) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        tracing::info!(
            region = %config.region,
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "Initialized S3 client"
        );
        S3Store {
            client: Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, req: PutObjectRequest) -> Result<(), BoxError> {
        let PutObjectRequest {
            bucket,
            key,
            body,
            content_type,
        } = req;

        let result = self
            .client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .set_content_type(content_type)
            .send()
            .await;

        match result {
            Ok(out) => {
                tracing::debug!(bucket = %bucket, key = %key, etag = out.e_tag().unwrap_or(""), "PutObject ok");
                Ok(())
            }
            Err(e) => {
                let e = aws_sdk_s3::error::DisplayErrorContext(e);
                tracing::error!(bucket = %bucket, key = %key, error = %e, "PutObject failed");
                Err(e.to_string().into())
            }
        }
    }
}
