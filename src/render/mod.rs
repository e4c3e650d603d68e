//! PDF summary renderer.
//!
//! Splits into a pure [`layout`] step and a [`pdf`] encoding step so the
//! page arithmetic can be tested without parsing PDF output.

pub mod layout;
pub mod pdf;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use layout::{BodyKind, Layout, SummaryHeader, layout_summary};

/// Errors from rendering a summary. Reading the *source* never fails;
/// an unreadable source becomes a placeholder page.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode PDF: {0}")]
    Encode(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of rendering one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedSummary {
    pub pages: usize,
    pub body: BodyKind,
}

/// Read `source`, lay it out, and write the PDF to `dest` (overwriting).
pub async fn render_summary_file(
    source: &Path,
    dest: &Path,
    header: &SummaryHeader,
    max_line_chars: usize,
) -> Result<RenderedSummary, RenderError> {
    let text = match tokio::fs::read(source).await {
        Ok(bytes) => String::from_utf8(bytes).ok(),
        Err(_) => None,
    };

    let layout = layout_summary(header, text.as_deref(), max_line_chars);
    let title = format!("File uploaded: {}", header.file_name);
    let bytes = pdf::encode(&layout, &title)?;

    tokio::fs::write(dest, &bytes)
        .await
        .map_err(|e| RenderError::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;

    Ok(RenderedSummary {
        pages: layout.page_count(),
        body: layout.body,
    })
}
