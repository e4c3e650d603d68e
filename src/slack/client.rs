//! Slack `files.upload` client.
//!
//! One multipart POST per file with a bearer token. No retry, and the
//! response is handed back verbatim whatever its status.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{UploadError, UploadOutcome, Uploader};
use crate::config::SlackConfig;
use crate::constants;

const PDF_MIME: &str = "application/pdf";

/// Bot token and destination channel.
#[derive(Clone)]
struct Credentials {
    token: String,
    channel: String,
}

/// Uploads summaries to a Slack channel.
pub struct SlackUploader {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<Credentials>,
}

impl SlackUploader {
    /// Build an uploader from configuration.
    ///
    /// Missing credentials are not an error here; [`Uploader::upload`]
    /// reports them as a skip for each file instead.
    pub fn from_config(config: &SlackConfig) -> Result<Self, UploadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UploadError::Client(e.to_string()))?;

        let credentials = match (non_empty(&config.token), non_empty(&config.channel)) {
            (Some(token), Some(channel)) => Some(Credentials {
                token: token.to_string(),
                channel: channel.to_string(),
            }),
            _ => None,
        };

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            credentials,
        })
    }

    /// `true` if both token and channel are present.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[async_trait]
impl Uploader for SlackUploader {
    async fn upload(&self, pdf_path: &Path, filename: &str) -> Result<UploadOutcome, UploadError> {
        let Some(credentials) = &self.credentials else {
            return Ok(UploadOutcome::Skipped {
                reason: constants::MISSING_CREDENTIALS.to_string(),
            });
        };

        let bytes = tokio::fs::read(pdf_path)
            .await
            .map_err(|e| UploadError::ReadPdf {
                path: pdf_path.to_path_buf(),
                source: e,
            })?;

        let file = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(PDF_MIME)
            .map_err(|e| UploadError::Request(e.to_string()))?;
        let form = Form::new()
            .text("channels", credentials.channel.clone())
            .text("title", filename.to_string())
            .text("filename", filename.to_string())
            .part("file", file);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&credentials.token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());

        Ok(UploadOutcome::Sent { status, body })
    }
}
