//! JSON output renderer.
//!
//! Outputs `{"files": [...], "summary": {...}}` format.

use crate::output::OutputRenderer;
use crate::pipeline::RunSummary;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, summary: &RunSummary) -> String {
        let output = serde_json::json!({
            "files": summary.files,
            "summary": {
                "processed": summary.files.len(),
                "sent": summary.sent(),
            },
        });

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ProcessedFile;
    use crate::render::BodyKind;
    use crate::slack::UploadOutcome;
    use std::path::PathBuf;

    #[test]
    fn render_json() {
        let summary = RunSummary {
            files: vec![
                ProcessedFile {
                    source: "uploads/a.txt".into(),
                    pdf: PathBuf::from("uploads/a.pdf"),
                    pages: 1,
                    body: BodyKind::Text { lines: 3 },
                    upload: UploadOutcome::Sent {
                        status: 200,
                        body: "{\"ok\":true}".into(),
                    },
                },
                ProcessedFile {
                    source: "uploads/b.bin".into(),
                    pdf: PathBuf::from("uploads/b.pdf"),
                    pages: 1,
                    body: BodyKind::Placeholder,
                    upload: UploadOutcome::Disabled,
                },
            ],
        };

        let output = JsonRenderer.render(&summary);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let files = parsed["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["source"], "uploads/a.txt");
        assert_eq!(files[0]["body"]["kind"], "text");
        assert_eq!(files[0]["body"]["lines"], 3);
        assert_eq!(files[0]["upload"]["result"], "sent");
        assert_eq!(files[1]["body"]["kind"], "placeholder");
        assert_eq!(parsed["summary"]["processed"], 2);
        assert_eq!(parsed["summary"]["sent"], 1);
    }

    #[test]
    fn render_empty_json() {
        let output = JsonRenderer.render(&RunSummary::default());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["files"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["processed"], 0);
    }
}
