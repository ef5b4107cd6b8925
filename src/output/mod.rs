//! Output renderers: plain (legacy line), detailed, JSON.

pub mod detailed;
pub mod json;
pub mod plain;

use crate::models::{OutputFormat, PensionOutcome};

/// Trait for rendering a pension outcome to an output format.
pub trait OutputRenderer {
    /// Render the outcome to a string.
    fn render(&self, outcome: &PensionOutcome) -> String;
}

impl OutputFormat {
    /// Render an outcome using the renderer for this format.
    pub fn render(&self, outcome: &PensionOutcome) -> String {
        match self {
            OutputFormat::Plain => plain::PlainRenderer.render(outcome),
            OutputFormat::Detailed => detailed::DetailedRenderer.render(outcome),
            OutputFormat::Json => json::JsonRenderer.render(outcome),
        }
    }
}
