#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Audio object storage
//!
//! Key naming for generated audio plus the [`ObjectStore`] seam and its S3
//! implementation.

mod error;
mod key;
mod s3;

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

pub use error::{Result, StorageError};
pub use key::{KEY_PREFIX, ObjectKey};
pub use s3::S3Store;

/// Content type stored alongside generated audio
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// A single object write
#[derive(Debug, Clone)]
pub struct PutObject {
    pub bucket: String,
    pub key: ObjectKey,
    pub body: Bytes,
    pub content_type: String,
}

impl PutObject {
    /// Build an MP3 audio write
    pub fn audio(bucket: impl Into<String>, key: ObjectKey, body: Bytes) -> Self {
        Self {
            bucket: bucket.into(),
            key,
            body,
            content_type: AUDIO_CONTENT_TYPE.to_owned(),
        }
    }

    pub fn location(&self) -> ObjectLocation {
        ObjectLocation {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
        }
    }
}

/// Where a stored object lives
///
/// Displays as `s3://<bucket>/<key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: ObjectKey,
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Trait for object store backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write one object, returning its location once durably stored
    async fn put(&self, object: PutObject) -> Result<ObjectLocation>;

    /// Get the backend name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_write_uses_mpeg_content_type() {
        let key = ObjectKey::from_raw("polly-audio/beta/x.mp3");
        let object = PutObject::audio("my-bucket", key, Bytes::from_static(b"ID3"));
        assert_eq!(object.content_type, "audio/mpeg");
    }

    #[test]
    fn location_displays_as_s3_uri() {
        let object = PutObject::audio(
            "my-bucket",
            ObjectKey::from_raw("polly-audio/beta/20260101T000000.000000Z-0000abcd.mp3"),
            Bytes::new(),
        );
        assert_eq!(
            object.location().to_string(),
            "s3://my-bucket/polly-audio/beta/20260101T000000.000000Z-0000abcd.mp3"
        );
    }
}
