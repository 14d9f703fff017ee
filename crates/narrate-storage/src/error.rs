use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store rejected the write or could not be reached
    #[error("Failed to store object '{key}': {message}")]
    Upstream { key: String, message: String },
}
