//! Amazon Polly provider using the `SynthesizeSpeech` API

use async_trait::async_trait;
use aws_sdk_polly::Client as PollyClient;
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use bytes::Bytes;

use super::SpeechSynthesizer;
use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse},
};

/// Content type reported when Polly omits one
const MP3_CONTENT_TYPE: &str = "audio/mpeg";

/// Amazon Polly synthesizer
///
/// Always requests the neural engine with MP3 output. The wrapped SDK client
/// holds no per-call state and is shared across invocations.
#[derive(Debug, Clone)]
pub struct PollySynthesizer {
    client: PollyClient,
}

impl PollySynthesizer {
    pub const fn new(client: PollyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        if request.input.trim().is_empty() {
            return Err(TtsError::InvalidRequest("text must not be empty".to_owned()));
        }

        tracing::debug!(
            voice = %request.voice,
            input_len = request.input.len(),
            "polly synthesize_speech request"
        );

        let output = self
            .client
            .synthesize_speech()
            .engine(Engine::Neural)
            .output_format(OutputFormat::Mp3)
            .voice_id(VoiceId::from(request.voice.as_str()))
            .text(request.input)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(error = %message, "polly synthesize_speech failed");
                TtsError::Upstream(message)
            })?;

        let content_type = output.content_type().map(str::to_owned);

        let audio = output.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read polly audio stream");
            TtsError::Upstream(format!("failed to read audio stream: {e}"))
        })?;

        into_speech_response(audio.into_bytes(), content_type)
    }

    fn name(&self) -> &str {
        "polly"
    }
}

/// Turn collected stream bytes into a response, rejecting an empty stream
fn into_speech_response(audio: Bytes, content_type: Option<String>) -> crate::error::Result<SpeechResponse> {
    if audio.is_empty() {
        tracing::error!("polly returned an empty audio stream");
        return Err(TtsError::NoAudio);
    }

    tracing::debug!("Polly synthesis complete, {} bytes", audio.len());

    Ok(SpeechResponse {
        audio,
        content_type: content_type.unwrap_or_else(|| MP3_CONTENT_TYPE.to_owned()),
    })
}
