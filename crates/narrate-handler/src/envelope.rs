use base64::Engine as _;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::HandlerError;

/// Raw invocation event
///
/// Variants are tried in declaration order, so an event carrying a string
/// `text` field is always a direct invocation even if it also has a `body`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Direct invocation: `{"text": "..."}`
    Direct { text: String },
    /// API Gateway proxy event carrying the HTTP body
    Proxy {
        body: ProxyBody,
        #[serde(default, rename = "isBase64Encoded")]
        is_base64_encoded: Option<bool>,
    },
    /// Any other shape, normalized to an empty payload
    Unrecognized(Value),
}

/// Body of a proxy event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProxyBody {
    /// Raw HTTP body, JSON text possibly base64-encoded
    Raw(String),
    /// Body already decoded into a JSON object
    Structured(Map<String, Value>),
    /// `null` or a non-object JSON value
    Other(Value),
}

/// Normalized request payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPayload {
    text: Option<String>,
}

impl RequestPayload {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Pick the `text` field out of a JSON object; non-string values are ignored
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            text: map.get("text").and_then(Value::as_str).map(str::to_owned),
        }
    }

    /// Trimmed text, or `None` when missing or blank
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }
}

impl Envelope {
    /// Classify a raw event; never fails
    pub fn from_value(value: Value) -> Self {
        Self::deserialize(&value).unwrap_or(Self::Unrecognized(value))
    }

    /// Wrap a plain HTTP body as a proxy envelope
    pub fn proxy(body: impl Into<String>) -> Self {
        Self::Proxy {
            body: ProxyBody::Raw(body.into()),
            is_base64_encoded: None,
        }
    }

    /// Extract the request payload
    ///
    /// Only malformed bodies are errors: invalid base64 when the event says the
    /// body is encoded, or a non-empty body that is not valid JSON. Every other
    /// shape yields a payload, possibly without text.
    pub fn normalize(&self) -> Result<RequestPayload, HandlerError> {
        match self {
            Self::Direct { text } => Ok(RequestPayload::with_text(text.as_str())),
            Self::Proxy {
                body,
                is_base64_encoded,
            } => body.normalize(is_base64_encoded.unwrap_or(false)),
            Self::Unrecognized(_) => Ok(RequestPayload::default()),
        }
    }
}

impl ProxyBody {
    fn normalize(&self, is_base64_encoded: bool) -> Result<RequestPayload, HandlerError> {
        match self {
            Self::Raw(raw) if is_base64_encoded => parse_json_body(&decode_base64(raw)?),
            Self::Raw(raw) => parse_json_body(raw),
            Self::Structured(map) => Ok(RequestPayload::from_map(map)),
            Self::Other(_) => Ok(RequestPayload::default()),
        }
    }
}

fn decode_base64(raw: &str) -> Result<String, HandlerError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(raw.trim())
        .map_err(|e| HandlerError::InvalidEncoding(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| HandlerError::InvalidEncoding(format!("decoded body is not UTF-8: {e}")))
}

fn parse_json_body(raw: &str) -> Result<RequestPayload, HandlerError> {
    if raw.trim().is_empty() {
        return Ok(RequestPayload::default());
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(RequestPayload::from_map(&map)),
        Ok(_) => Ok(RequestPayload::default()),
        Err(e) => Err(HandlerError::InvalidJson(e.to_string())),
    }
}
