//! Output renderers for a run summary: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::pipeline::RunSummary;

/// Trait for rendering a run summary to an output format.
pub trait OutputRenderer {
    /// Render the summary to a string.
    fn render(&self, summary: &RunSummary) -> String;
}
