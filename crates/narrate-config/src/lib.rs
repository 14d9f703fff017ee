#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod env;

pub use env::{ConfigSource, ProcessEnv};

/// Variable holding the target bucket name
pub const BUCKET_VAR: &str = "BUCKET_NAME";
/// Variables holding the environment label, primary name first
pub const ENVIRONMENT_VARS: [&str; 2] = ["ENV_PREFIX", "ENV"];
/// Variable holding the Polly voice identifier
pub const VOICE_VAR: &str = "VOICE_ID";

/// Environment label used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "beta";
/// Voice used when none is configured
pub const DEFAULT_VOICE: &str = "Joanna";

/// Configuration errors
///
/// These indicate a deployment defect rather than a bad request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The bucket variable is unset or blank
    #[error("BUCKET_NAME is not configured")]
    MissingBucket,
}

/// Configuration resolved for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Object store bucket receiving the audio
    pub bucket: String,
    /// Lower-cased environment label used to namespace object keys
    pub environment: String,
    /// Voice identifier passed to the synthesizer
    pub voice: String,
}

impl EffectiveConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(&ProcessEnv)
    }

    /// Resolve configuration from an arbitrary source
    ///
    /// Optional values fall back through their candidate variables and then
    /// to a fixed default. Blank values count as unset.
    pub fn resolve(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let bucket = source.first_non_blank(&[BUCKET_VAR]).ok_or(ConfigError::MissingBucket)?;

        let environment = source
            .first_non_blank(&ENVIRONMENT_VARS)
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned())
            .to_lowercase();

        let voice = source
            .first_non_blank(&[VOICE_VAR])
            .unwrap_or_else(|| DEFAULT_VOICE.to_owned());

        tracing::debug!(%bucket, %environment, %voice, "resolved configuration");

        Ok(Self {
            bucket,
            environment,
            voice,
        })
    }
}
