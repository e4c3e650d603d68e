//! Configuration loading and layering.
//!
//! Handles `.pushdigest.toml` loading and environment variable resolution.
//! The resulting [`Config`] is built once at start-up and passed down.

pub mod loader;

pub use loader::{Config, ConfigError, RenderConfig, SlackConfig, WatchConfig};
