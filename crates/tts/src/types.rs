use bytes::Bytes;

/// Speech synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to synthesize, already trimmed
    pub input: String,
    /// Provider voice identifier (e.g. "Joanna")
    pub voice: String,
}

/// Raw audio returned by a synthesizer
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// Encoded audio bytes
    pub audio: Bytes,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
