//! Terminal renderer: one block per processed file.
//!
//! The upload line is printed verbatim (`Slack upload response: <status>
//! <body>`) so CI logs keep the raw endpoint answer.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::pipeline::RunSummary;
use crate::render::BodyKind;
use crate::slack::UploadOutcome;

/// Terminal output renderer.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, summary: &RunSummary) -> String {
        if summary.is_empty() {
            return format!("{}\n", "No new files under the uploads directory.".dimmed());
        }

        let mut output = String::new();
        for file in &summary.files {
            let body = match file.body {
                BodyKind::Text { lines } => format!("{lines} line(s)"),
                BodyKind::Placeholder => "binary".to_string(),
            };
            output.push_str(&format!(
                "{} {} {} ({} page(s), {})\n",
                file.source.bold(),
                "→".dimmed(),
                file.pdf.display(),
                file.pages,
                body,
            ));

            match &file.upload {
                UploadOutcome::Sent { status, body } => {
                    output.push_str(&format!("Slack upload response: {status} {body}\n"));
                }
                UploadOutcome::Skipped { reason } => {
                    output.push_str(&format!("{}\n", reason.yellow()));
                }
                UploadOutcome::Disabled => {
                    output.push_str(&format!("{}\n", "Upload disabled.".dimmed()));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ProcessedFile;
    use std::path::PathBuf;

    fn file(upload: UploadOutcome) -> ProcessedFile {
        ProcessedFile {
            source: "uploads/readme.txt".into(),
            pdf: PathBuf::from("uploads/readme.pdf"),
            pages: 1,
            body: BodyKind::Text { lines: 3 },
            upload,
        }
    }

    #[test]
    fn prints_raw_response() {
        colored::control::set_override(false);
        let summary = RunSummary {
            files: vec![file(UploadOutcome::Sent {
                status: 403,
                body: "{\"ok\":false,\"error\":\"not_in_channel\"}".into(),
            })],
        };
        let output = TerminalRenderer.render(&summary);
        assert!(output.contains("uploads/readme.txt"));
        assert!(output.contains("uploads/readme.pdf"));
        assert!(output.contains(
            "Slack upload response: 403 {\"ok\":false,\"error\":\"not_in_channel\"}"
        ));
    }

    #[test]
    fn prints_skip_reason() {
        colored::control::set_override(false);
        let summary = RunSummary {
            files: vec![file(UploadOutcome::Skipped {
                reason: "Missing Slack token or channel ID.".into(),
            })],
        };
        let output = TerminalRenderer.render(&summary);
        assert!(output.contains("Missing Slack token or channel ID."));
        assert!(!output.contains("Slack upload response"));
    }

    #[test]
    fn empty_summary() {
        colored::control::set_override(false);
        let output = TerminalRenderer.render(&RunSummary::default());
        assert!(output.contains("No new files"));
    }
}
