use std::sync::Arc;

use narrate_config::{ConfigSource, EffectiveConfig, ProcessEnv};
use narrate_storage::{ObjectKey, ObjectLocation, ObjectStore, PutObject};
use serde_json::Value;
use tts::{SpeechRequest, SpeechSynthesizer, TtsError};

use crate::{
    envelope::Envelope,
    error::{HandlerError, Result},
    response::HandlerResponse,
};

/// Text-to-speech request handler
///
/// Runs normalize, resolve config, synthesize, store and respond for each
/// invocation. Collaborators are injected and shared across invocations;
/// configuration is re-read every call.
#[derive(Clone)]
pub struct Handler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn ObjectStore>,
    config: Arc<dyn ConfigSource>,
}

impl Handler {
    /// Create a handler reading configuration from the process environment
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            synthesizer,
            store,
            config: Arc::new(ProcessEnv),
        }
    }

    /// Replace the configuration source
    #[must_use]
    pub fn with_config_source(mut self, config: Arc<dyn ConfigSource>) -> Self {
        self.config = config;
        self
    }

    /// Handle a raw invocation event
    pub async fn handle_event(&self, event: Value) -> HandlerResponse {
        self.handle(&Envelope::from_value(event)).await
    }

    /// Handle a classified envelope
    ///
    /// Never fails: every error is logged once here and turned into a
    /// response.
    pub async fn handle(&self, envelope: &Envelope) -> HandlerResponse {
        match self.run(envelope).await {
            Ok(location) => {
                tracing::info!(s3_uri = %location, "audio generated");
                HandlerResponse::success(&location)
            }
            Err(error) => {
                let status = error.status_code();
                if status.is_client_error() {
                    tracing::warn!(kind = error.kind(), status = status.as_u16(), error = %error, "rejected request");
                } else {
                    tracing::error!(kind = error.kind(), status = status.as_u16(), error = %error, "request failed");
                }
                HandlerResponse::from_error(&error)
            }
        }
    }

    async fn run(&self, envelope: &Envelope) -> Result<ObjectLocation> {
        let payload = envelope.normalize()?;
        let text = payload.text().ok_or(HandlerError::MissingText)?;

        let config = EffectiveConfig::resolve(self.config.as_ref())?;

        tracing::debug!(
            provider = self.synthesizer.name(),
            voice = %config.voice,
            text_len = text.len(),
            "synthesizing speech"
        );

        let speech = self
            .synthesizer
            .synthesize(SpeechRequest {
                input: text.to_owned(),
                voice: config.voice,
            })
            .await?;

        if speech.audio.is_empty() {
            return Err(TtsError::NoAudio.into());
        }

        let key = ObjectKey::generate(&config.environment);

        tracing::debug!(store = self.store.name(), %key, size = speech.audio.len(), "storing audio");

        let location = self.store.put(PutObject::audio(config.bucket, key, speech.audio)).await?;

        Ok(location)
    }
}
