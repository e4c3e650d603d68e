//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.pushdigest.toml` in repo root (or the file given with `--config`)
//! 4. `~/.config/pushdigest/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the push event document.
    pub event_path: Option<PathBuf>,
    /// Repository identifier shown in the PDF header (display only).
    pub repository: Option<String>,
    pub slack: SlackConfig,
    pub watch: WatchConfig,
    pub render: RenderConfig,
}

/// Slack upload settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    pub token: Option<String>,
    pub channel: Option<String>,
    pub api_url: String,
    /// Request timeout. Unset means the request may block indefinitely.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("channel", &self.channel)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            channel: None,
            api_url: constants::SLACK_UPLOAD_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Which pushed paths are picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub prefix: String,
    pub skip_suffix: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            prefix: constants::UPLOADS_PREFIX.to_string(),
            skip_suffix: constants::PDF_SUFFIX.to_string(),
        }
    }
}

/// PDF rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub max_line_chars: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_line_chars: constants::MAX_LINE_CHARS,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then `explicit` if given (otherwise the
    /// repo-local file), then applies environment variable overrides.
    pub fn load(repo_root: Option<&Path>, explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or repo-local config
        if let Some(path) = explicit {
            let local = Self::load_file(path)?;
            config.merge(local);
        } else if let Some(root) = repo_root {
            let local_path = root.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        if other.event_path.is_some() {
            self.event_path = other.event_path;
        }
        if other.repository.is_some() {
            self.repository = other.repository;
        }

        // Slack settings
        if other.slack.token.is_some() {
            self.slack.token = other.slack.token;
        }
        if other.slack.channel.is_some() {
            self.slack.channel = other.slack.channel;
        }
        if other.slack.api_url != SlackConfig::default().api_url {
            self.slack.api_url = other.slack.api_url;
        }
        if other.slack.timeout_secs.is_some() {
            self.slack.timeout_secs = other.slack.timeout_secs;
        }

        // Watch settings
        let default_watch = WatchConfig::default();
        if other.watch.prefix != default_watch.prefix {
            self.watch.prefix = other.watch.prefix;
        }
        if other.watch.skip_suffix != default_watch.skip_suffix {
            self.watch.skip_suffix = other.watch.skip_suffix;
        }

        if other.render.max_line_chars != RenderConfig::default().max_line_chars {
            self.render.max_line_chars = other.render.max_line_chars;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Empty values count as unset, matching how CI runners expose
    /// secrets that were never configured.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_EVENT_PATH) {
            self.event_path = Some(PathBuf::from(val));
        }
        if let Some(val) = env.non_empty(constants::ENV_REPOSITORY) {
            self.repository = Some(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_SLACK_TOKEN) {
            self.slack.token = Some(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_SLACK_CHANNEL) {
            self.slack.channel = Some(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_SLACK_API_URL) {
            self.slack.api_url = val;
        }
    }
}
