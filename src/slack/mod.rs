//! Uploader trait and the Slack file upload client.
//!
//! The trait keeps the pipeline independent of the chat service so tests
//! can substitute a recording uploader.

pub mod client;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use client::SlackUploader;

/// Errors from the upload step.
///
/// Non-2xx responses are not errors: they come back as
/// [`UploadOutcome::Sent`] with the status and body untouched.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("failed to read {path}: {source}")]
    ReadPdf {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("upload request failed: {0}")]
    Request(String),
}

/// What happened to one upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// The request went out; whatever the endpoint answered.
    Sent { status: u16, body: String },
    /// Not attempted for a configuration reason.
    Skipped { reason: String },
    /// Uploads were turned off for this run.
    Disabled,
}

/// Sends a rendered summary somewhere.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload the PDF at `pdf_path`, shown as `filename`.
    async fn upload(&self, pdf_path: &Path, filename: &str) -> Result<UploadOutcome, UploadError>;
}

/// Uploader used with `--no-upload`.
pub struct DisabledUploader;

#[async_trait]
impl Uploader for DisabledUploader {
    async fn upload(&self, _pdf_path: &Path, _filename: &str) -> Result<UploadOutcome, UploadError> {
        Ok(UploadOutcome::Disabled)
    }
}
