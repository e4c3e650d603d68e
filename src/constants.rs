//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! the upload endpoint and the page geometry so a change only touches
//! this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "pushdigest";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.pushdigest.toml` in repo root).
pub const CONFIG_FILENAME: &str = ".pushdigest.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "pushdigest";

/// Slack file upload endpoint.
pub const SLACK_UPLOAD_URL: &str = "https://slack.com/api/files.upload";

/// Watched directory prefix (repository-relative).
pub const UPLOADS_PREFIX: &str = "uploads/";

/// Files with this suffix are never selected (they are our own output).
pub const PDF_SUFFIX: &str = ".pdf";

/// Extension given to rendered summaries.
pub const PDF_EXTENSION: &str = "pdf";

/// Body lines are cut to this many characters.
pub const MAX_LINE_CHARS: usize = 100;

/// Body text drawn when the source is not readable as UTF-8 text.
pub const BINARY_PLACEHOLDER: &str = "Binary file or could not read contents.";

/// Reported when the uploader has no credentials.
pub const MISSING_CREDENTIALS: &str = "Missing Slack token or channel ID.";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_SLACK_TOKEN: &str = "SLACK_BOT_TOKEN";
pub const ENV_SLACK_CHANNEL: &str = "SLACK_CHANNEL_ID";
pub const ENV_SLACK_API_URL: &str = "SLACK_API_URL";
