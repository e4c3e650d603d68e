//! Push event document: model, loading, and upload selection.
//!
//! The document is the JSON payload a CI runner writes for a push
//! (`GITHUB_EVENT_PATH`). Only the per-commit `added` / `modified` path
//! lists are read; everything else is ignored.

pub mod select;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use select::{SelectedFile, UploadFilter, select_uploads};

/// Errors while reading the event document. All of them abort the run.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("no event path configured (set GITHUB_EVENT_PATH or pass --event)")]
    NotConfigured,

    #[error("failed to read event file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse event file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A push event. Missing fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PushEvent {
    pub commits: Vec<Commit>,
}

/// One commit record of a push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub added: Vec<String>,
    pub modified: Vec<String>,
}

impl PushEvent {
    /// Read and parse an event document.
    pub async fn load(path: &Path) -> Result<Self, EventError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EventError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::parse(&content).map_err(|e| EventError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse an event document from a string.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Every changed path in push order: per commit, `added` then `modified`.
    pub fn changed_paths(&self) -> impl Iterator<Item = &str> {
        self.commits
            .iter()
            .flat_map(|c| c.added.iter().chain(c.modified.iter()))
            .map(String::as_str)
    }
}
