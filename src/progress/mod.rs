//! Progress reporting for terminal output.
//!
//! Prints one colored status line per file step to stderr as the run
//! advances. Silenced with `--quiet`; the final report on stdout is not
//! affected.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Where a file currently is in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// PDF written.
    Rendered { pages: usize },
    /// Endpoint answered.
    Uploaded { status: u16 },
    /// Upload not attempted.
    UploadSkipped(String),
}

/// Records and prints per-file progress.
pub struct ProgressReporter {
    history: Mutex<Vec<(String, FileStatus)>>,
    /// If false, nothing is printed (history is still kept).
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            history: Mutex::new(Vec::new()),
            enabled,
        }
    }

    /// Announce how many files were selected.
    pub fn start(&self, file_count: usize) {
        if !self.enabled {
            return;
        }
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let noun = if file_count == 1 { "file" } else { "files" };
        let _ = writeln!(
            handle,
            "  {} Summarising {file_count} uploaded {noun}",
            "▸".cyan().bold(),
        );
        let _ = handle.flush();
    }

    /// Record a status change for `file` and print it.
    pub fn update(&self, file: &str, status: FileStatus) {
        if self.enabled {
            Self::print(file, &status);
        }
        if let Ok(mut history) = self.history.lock() {
            history.push((file.to_string(), status));
        }
    }

    /// Statuses recorded so far, in order.
    pub fn history(&self) -> Vec<(String, FileStatus)> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    fn print(file: &str, status: &FileStatus) {
        let (icon, text) = match status {
            FileStatus::Rendered { pages } => (
                "✔".green().bold().to_string(),
                format!("rendered ({pages} page{})", if *pages == 1 { "" } else { "s" })
                    .green()
                    .to_string(),
            ),
            FileStatus::Uploaded { status } if (200..300).contains(status) => (
                "✔".green().bold().to_string(),
                format!("uploaded (HTTP {status})").green().to_string(),
            ),
            FileStatus::Uploaded { status } => (
                "✖".red().bold().to_string(),
                format!("upload answered HTTP {status}").red().to_string(),
            ),
            FileStatus::UploadSkipped(reason) => (
                "⚠".yellow().bold().to_string(),
                reason.yellow().to_string(),
            ),
        };
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "    {icon} {} {text}", file.dimmed());
        let _ = handle.flush();
    }
}
