//! Run driver: select pushed files, render each, upload each.
//!
//! Strictly sequential. One file is rendered and uploaded before the next
//! one is looked at.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::constants;
use crate::event::{EventError, PushEvent, SelectedFile, UploadFilter, select_uploads};
use crate::progress::{FileStatus, ProgressReporter};
use crate::render::{self, BodyKind, RenderError, SummaryHeader};
use crate::slack::{UploadError, UploadOutcome, Uploader};

/// Shown in the PDF header when no repository identifier is configured.
pub const UNKNOWN_REPOSITORY: &str = "unknown";

/// Errors that abort the whole run once files are being processed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to render {file}: {source}")]
    Render {
        file: String,
        source: RenderError,
    },

    #[error("failed to upload {file}: {source}")]
    Upload {
        file: String,
        source: UploadError,
    },
}

/// A run that stopped part way. `completed` holds every file that finished
/// before the failure, so their upload responses can still be reported.
#[derive(Error, Debug)]
#[error("run stopped after {} file(s)", .completed.files.len())]
pub struct RunAborted {
    pub completed: RunSummary,
    #[source]
    pub error: PipelineError,
}

/// One file that went through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedFile {
    /// Path as pushed (repository-relative).
    pub source: String,
    /// Rendered summary on disk.
    pub pdf: PathBuf,
    pub pages: usize,
    pub body: BodyKind,
    pub upload: UploadOutcome,
}

/// Everything a run did, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files: Vec<ProcessedFile>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files whose upload request was sent.
    pub fn sent(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.upload, UploadOutcome::Sent { .. }))
            .count()
    }
}

/// Load the event document named by the configuration.
pub async fn load_event(config: &Config) -> Result<PushEvent, EventError> {
    let path = config.event_path.as_deref().ok_or(EventError::NotConfigured)?;
    PushEvent::load(path).await
}

/// Per-run driver holding the injected configuration and uploader.
pub struct UploadPipeline<'a> {
    config: &'a Config,
    uploader: &'a dyn Uploader,
    progress: &'a ProgressReporter,
}

impl<'a> UploadPipeline<'a> {
    pub fn new(
        config: &'a Config,
        uploader: &'a dyn Uploader,
        progress: &'a ProgressReporter,
    ) -> Self {
        Self {
            config,
            uploader,
            progress,
        }
    }

    /// Process every selected file of `event`, resolving paths against `root`.
    ///
    /// On failure the files finished so far come back inside [`RunAborted`].
    pub async fn run(&self, event: &PushEvent, root: &Path) -> Result<RunSummary, RunAborted> {
        let filter = UploadFilter::from_config(&self.config.watch);
        let selected = select_uploads(event, root, &filter);
        self.progress.start(selected.len());

        let mut summary = RunSummary::default();
        for file in &selected {
            match self.process(file).await {
                Ok(processed) => summary.files.push(processed),
                Err(error) => {
                    return Err(RunAborted {
                        completed: summary,
                        error,
                    });
                }
            }
        }
        Ok(summary)
    }

    async fn process(&self, file: &SelectedFile) -> Result<ProcessedFile, PipelineError> {
        let pdf_path = file.path.with_extension(constants::PDF_EXTENSION);
        let header = self.header_for(file);

        let rendered = render::render_summary_file(
            &file.path,
            &pdf_path,
            &header,
            self.config.render.max_line_chars,
        )
        .await
        .map_err(|e| PipelineError::Render {
            file: file.relative.clone(),
            source: e,
        })?;
        self.progress.update(
            &file.relative,
            FileStatus::Rendered {
                pages: rendered.pages,
            },
        );

        let display_name = file_name_of(&pdf_path);
        let upload = self
            .uploader
            .upload(&pdf_path, &display_name)
            .await
            .map_err(|e| PipelineError::Upload {
                file: file.relative.clone(),
                source: e,
            })?;
        match &upload {
            UploadOutcome::Sent { status, .. } => {
                self.progress
                    .update(&file.relative, FileStatus::Uploaded { status: *status });
            }
            UploadOutcome::Skipped { reason } => {
                self.progress
                    .update(&file.relative, FileStatus::UploadSkipped(reason.clone()));
            }
            UploadOutcome::Disabled => {}
        }

        Ok(ProcessedFile {
            source: file.relative.clone(),
            pdf: pdf_path,
            pages: rendered.pages,
            body: rendered.body,
            upload,
        })
    }

    fn header_for(&self, file: &SelectedFile) -> SummaryHeader {
        SummaryHeader {
            file_name: file_name_of(&file.path),
            repository: self
                .config
                .repository
                .clone()
                .unwrap_or_else(|| UNKNOWN_REPOSITORY.to_string()),
            source_path: file.relative.clone(),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::DisabledUploader;

    #[test]
    fn file_name_of_takes_last_component() {
        assert_eq!(file_name_of(Path::new("uploads/nested/a.txt")), "a.txt");
        assert_eq!(file_name_of(Path::new("/")), "");
    }

    #[tokio::test]
    async fn load_event_requires_a_path() {
        let err = load_event(&Config::default()).await.unwrap_err();
        assert!(matches!(err, EventError::NotConfigured));
    }

    #[test]
    fn header_falls_back_to_unknown_repository() {
        let config = Config::default();
        let progress = ProgressReporter::new(false);
        let pipeline = UploadPipeline::new(&config, &DisabledUploader, &progress);
        let header = pipeline.header_for(&SelectedFile {
            relative: "uploads/a.txt".into(),
            path: PathBuf::from("./uploads/a.txt"),
        });
        assert_eq!(header.repository, "unknown");
        assert_eq!(header.file_name, "a.txt");
        assert_eq!(header.source_path, "uploads/a.txt");
    }

    #[tokio::test]
    async fn pdf_replaces_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("uploads")).unwrap();
        std::fs::write(dir.path().join("uploads/data.tar.gz"), "x").unwrap();
        std::fs::write(dir.path().join("uploads/noext"), "y").unwrap();

        let event = PushEvent::parse(
            r#"{"commits": [{"added": ["uploads/data.tar.gz", "uploads/noext"]}]}"#,
        )
        .unwrap();
        let config = Config::default();
        let progress = ProgressReporter::new(false);
        let summary = UploadPipeline::new(&config, &DisabledUploader, &progress)
            .run(&event, dir.path())
            .await
            .unwrap();

        let pdfs: Vec<_> = summary.files.iter().map(|f| f.pdf.clone()).collect();
        assert_eq!(
            pdfs,
            vec![
                dir.path().join("uploads/data.tar.pdf"),
                dir.path().join("uploads/noext.pdf"),
            ]
        );
        assert!(pdfs.iter().all(|p| p.exists()));
        assert_eq!(summary.sent(), 0);
    }
}
