//! Clap argument types.
//!
//! Every flag is optional: running with none reads the event path, the
//! repository name and the Slack credentials from the CI environment.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pushdigest::output::OutputRenderer;
use pushdigest::pipeline::RunSummary;

/// Render pushed upload files as PDF summaries and post them to Slack.
#[derive(Parser, Debug)]
#[command(
    name = "pushdigest",
    version = pushdigest::constants::VERSION,
    long_version = super::LONG_VERSION,
)]
pub struct Cli {
    /// Repository working directory that event paths are relative to.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Push event JSON document (defaults to $GITHUB_EVENT_PATH).
    #[arg(long)]
    pub event: Option<PathBuf>,

    /// Config file to use instead of `<path>/.pushdigest.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for the run report.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Render PDFs but do not upload them.
    #[arg(long, default_value_t = false)]
    pub no_upload: bool,

    /// Suppress progress lines on stderr. The report is still printed.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a run summary using the renderer for this format.
    pub fn render(&self, summary: &RunSummary) -> String {
        match self {
            OutputFormat::Terminal => pushdigest::output::terminal::TerminalRenderer.render(summary),
            OutputFormat::Json => pushdigest::output::json::JsonRenderer.render(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["pushdigest"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(cli.event.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert!(!cli.no_upload);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "pushdigest",
            "--path",
            "/repo",
            "--event",
            "/tmp/event.json",
            "--config",
            "ci.toml",
            "--format",
            "json",
            "--no-upload",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.path, PathBuf::from("/repo"));
        assert_eq!(cli.event, Some(PathBuf::from("/tmp/event.json")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_upload);
        assert!(cli.quiet);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pushdigest", "--format", "xml"]).is_err());
    }

    #[test]
    fn json_format_renders_empty_summary() {
        let out = OutputFormat::Json.render(&RunSummary::default());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["summary"]["processed"], 0);
    }
}
