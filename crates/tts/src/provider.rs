pub mod polly;

use async_trait::async_trait;

use crate::types::{SpeechRequest, SpeechResponse};

/// Trait for speech synthesis backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}
