use std::fmt;

use jiff::Timestamp;

/// Fixed prefix for every generated audio object
pub const KEY_PREFIX: &str = "polly-audio";

const KEY_EXTENSION: &str = "mp3";

/// Object key for a generated audio file
///
/// Layout is `polly-audio/<environment>/<timestamp>.mp3`. Downstream consumers
/// enumerate audio by environment and time, so the layout must not change.
/// The timestamp segment is UTC with microsecond resolution followed by a
/// random suffix, e.g. `20261018T093005.123456Z-9f86d081`, and never contains
/// colons or spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Generate a fresh key for the current instant
    pub fn generate(environment: &str) -> Self {
        Self::at(environment, Timestamp::now(), rand::random())
    }

    /// Build the key for a given instant and collision suffix
    pub fn at(environment: &str, timestamp: Timestamp, suffix: u32) -> Self {
        let seconds = timestamp.strftime("%Y%m%dT%H%M%S");
        let micros = timestamp.subsec_microsecond().unsigned_abs();

        Self(format!(
            "{KEY_PREFIX}/{environment}/{seconds}.{micros:06}Z-{suffix:08x}.{KEY_EXTENSION}"
        ))
    }

    #[cfg(test)]
    pub(crate) fn from_raw(key: &str) -> Self {
        Self(key.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
