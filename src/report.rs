//! Rendering of final mower states.

use crate::mower::Mower;

/// How results are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `x y C` line per mower.
    #[default]
    Text,
    /// A JSON array of `{ "position": [x, y], "orientation": "C" }` objects.
    Json,
}

/// Renders `mowers` in input order.
///
/// Text output is newline-terminated per mower, so zero mowers render as an empty string.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(mowers: &[Mower], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(mowers.iter().map(|mower| format!("{mower}\n")).collect()),
        OutputFormat::Json => serde_json::to_string(mowers),
    }
}
