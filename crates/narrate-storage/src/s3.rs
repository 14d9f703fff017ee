use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectLocation, ObjectStore, PutObject, error::StorageError};

/// Amazon S3 object store
///
/// The SDK client is cheap to clone and safe to share between invocations.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub const fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, object: PutObject) -> crate::Result<ObjectLocation> {
        let location = object.location();

        tracing::debug!(
            bucket = %object.bucket,
            key = %object.key,
            size = object.body.len(),
            "s3 put_object request"
        );

        self.client
            .put_object()
            .bucket(object.bucket)
            .key(object.key.as_str())
            .content_type(object.content_type)
            .body(ByteStream::from(object.body))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(key = %location.key, error = %message, "s3 put_object failed");
                StorageError::Upstream {
                    key: location.key.to_string(),
                    message,
                }
            })?;

        Ok(location)
    }

    fn name(&self) -> &str {
        "s3"
    }
}
