use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request rejected before reaching the provider
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider call succeeded but produced no audio
    #[error("Polly did not return audio stream")]
    NoAudio,

    /// Provider call or stream read failed
    #[error("Speech synthesis request failed: {0}")]
    Upstream(String),
}
