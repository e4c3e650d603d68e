//! pushdigest: render pushed upload files as PDF summaries and post them to Slack (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod event;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod slack;
