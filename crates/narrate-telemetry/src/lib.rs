//! Logging for narrate
//!
//! Installs a `tracing-subscriber` registry with an env filter and a `fmt`
//! layer emitting either plain text or JSON lines.

use std::str::FromStr;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable single-line output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Unknown log format name
#[derive(Debug, thiserror::Error)]
#[error("unknown log format '{0}', expected 'text' or 'json'")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownLogFormat(s.to_owned())),
        }
    }
}

/// Initialize logging
///
/// Falls back to `info` when `log_filter` is not a valid filter directive.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(log_filter: &str, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false);

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry
            .with(fmt_layer.json().flatten_event(true).with_current_span(false))
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn default_is_text() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
