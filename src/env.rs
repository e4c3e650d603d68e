//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so nothing ever has to
//! call [`std::env::set_var`] to simulate a CI runner.

use std::collections::HashMap;

/// Environment variable reader.
///
/// Wraps lookups so that production code hits `std::env` while tests
/// can supply a controlled set of values.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// Public so integration tests can build a fake runner environment.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// An empty mock environment.
    pub fn empty() -> Self {
        Self {
            overrides: Some(HashMap::new()),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating an empty value as absent.
    ///
    /// CI runners export unset secrets as empty strings.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("SLACK_BOT_TOKEN", "xoxb-1"), ("SLACK_CHANNEL_ID", "C1")]);
        assert_eq!(env.var("SLACK_BOT_TOKEN").unwrap(), "xoxb-1");
        assert_eq!(env.var("SLACK_CHANNEL_ID").unwrap(), "C1");
    }

    #[test]
    fn empty_env_has_nothing() {
        let env = Env::empty();
        assert!(env.var("HOME").is_err());
    }

    #[test]
    fn non_empty_filters_blank_values() {
        let env = Env::mock([("SET", "value"), ("BLANK", "")]);
        assert_eq!(env.non_empty("SET").as_deref(), Some("value"));
        assert_eq!(env.non_empty("BLANK"), None);
        assert_eq!(env.non_empty("ABSENT"), None);
    }
}
