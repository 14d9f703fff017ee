#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Speech synthesis for the narrate handler
//!
//! Exposes the [`SpeechSynthesizer`] seam the pipeline calls through and an
//! Amazon Polly implementation of it.

mod error;
mod provider;
mod types;

pub use error::{Result, TtsError};
pub use provider::{SpeechSynthesizer, polly::PollySynthesizer};
pub use types::{SpeechRequest, SpeechResponse};
