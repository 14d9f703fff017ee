#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Text-to-speech request handler
//!
//! Accepts direct invocations and API Gateway proxy events, synthesizes the
//! requested text and stores the audio, always answering with a proxy
//! integration response.

mod envelope;
mod error;
mod handler;
#[cfg(feature = "http")]
mod router;
mod response;

pub use envelope::{Envelope, ProxyBody, RequestPayload};
pub use error::{HandlerError, Result};
pub use handler::Handler;
#[cfg(feature = "http")]
pub use router::endpoint_router;
pub use response::HandlerResponse;
