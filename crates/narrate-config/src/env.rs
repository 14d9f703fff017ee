use std::collections::HashMap;

/// Source of process-wide configuration values
///
/// The Lambda handler reads from [`ProcessEnv`]; tests and the local dev
/// server can hand in a plain map instead.
pub trait ConfigSource: Send + Sync {
    /// Look up a single variable, returning `None` when it is unset
    fn var(&self, name: &str) -> Option<String>;

    /// Return the first candidate that is set and non-blank, trimmed
    fn first_non_blank(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| {
            self.var(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        })
    }
}

/// Reads configuration from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
