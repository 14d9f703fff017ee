use http::StatusCode;
use narrate_config::ConfigError;
use narrate_storage::StorageError;
use thiserror::Error;
use tts::TtsError;

pub type Result<T> = std::result::Result<T, HandlerError>;

/// Every way an invocation can fail
///
/// Input errors map to 400, everything else to 500. The variants are closed
/// so each one has a fixed response body.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No usable `text` after normalization
    #[error("Missing 'text' in request body")]
    MissingText,

    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// Body flagged as base64 could not be decoded
    #[error("Invalid base64 body: {0}")]
    InvalidEncoding(String),

    /// Deployment is missing required configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Speech synthesis failed or produced nothing
    #[error(transparent)]
    Synthesis(#[from] TtsError),

    /// Writing the audio object failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl HandlerError {
    /// Get the HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::InvalidJson(_) | Self::InvalidEncoding(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Synthesis(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind, used as a log field
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingText | Self::InvalidJson(_) | Self::InvalidEncoding(_) => "invalid_request_error",
            Self::Config(_) => "config_error",
            Self::Synthesis(TtsError::NoAudio) => "upstream_error",
            Self::Synthesis(_) | Self::Storage(_) => "internal_error",
        }
    }

    /// The `error` field of the response body
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingText | Self::Config(_) => self.to_string(),
            Self::InvalidJson(_) => "Invalid JSON body".to_owned(),
            Self::InvalidEncoding(_) => "Invalid base64 body".to_owned(),
            Self::Synthesis(TtsError::NoAudio) => "Speech synthesis failed".to_owned(),
            Self::Synthesis(_) | Self::Storage(_) => "Internal server error".to_owned(),
        }
    }

    /// The optional `detail` field of the response body
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::MissingText | Self::Config(_) => None,
            Self::InvalidJson(detail) | Self::InvalidEncoding(detail) => Some(detail.clone()),
            Self::Synthesis(e) => Some(e.to_string()),
            Self::Storage(e) => Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_bad_requests() {
        for err in [
            HandlerError::MissingText,
            HandlerError::InvalidJson("eof".to_owned()),
            HandlerError::InvalidEncoding("bad byte".to_owned()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.kind(), "invalid_request_error");
        }
    }

    #[test]
    fn missing_text_has_no_detail() {
        let err = HandlerError::MissingText;
        assert_eq!(err.client_message(), "Missing 'text' in request body");
        assert!(err.detail().is_none());
    }

    #[test]
    fn config_error_is_distinct_from_input_errors() {
        let err = HandlerError::from(ConfigError::MissingBucket);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "config_error");
        assert_eq!(err.client_message(), "BUCKET_NAME is not configured");
        assert!(err.detail().is_none());
    }

    #[test]
    fn no_audio_mentions_missing_stream() {
        let err = HandlerError::from(TtsError::NoAudio);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "upstream_error");
        assert_eq!(err.client_message(), "Speech synthesis failed");
        assert_eq!(err.detail().as_deref(), Some("Polly did not return audio stream"));
    }

    #[test]
    fn transport_faults_are_internal_errors() {
        let synthesis = HandlerError::from(TtsError::Upstream("timeout".to_owned()));
        let storage = HandlerError::from(StorageError::Upstream {
            key: "polly-audio/beta/x.mp3".to_owned(),
            message: "access denied".to_owned(),
        });

        for err in [synthesis, storage] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.client_message(), "Internal server error");
            assert!(err.detail().is_some());
        }
    }
}
