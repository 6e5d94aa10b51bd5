//! Output formatting and reporting
//!
//! Renders converted resources as JSON and reports what was written

use crate::commands::convert::ConvertedInput;
use colored::*;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::debug;
use yaml2fhir_core::{ConvertError, Result};

/// Summary statistics for a convert run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub inputs: usize,
    pub resources: usize,
    pub skipped: usize,
    pub files_written: usize,
}

impl ConvertSummary {
    pub fn record(&mut self, input: &ConvertedInput) {
        self.inputs += 1;
        self.resources += input.resources.len();
        self.skipped += input.skipped;
    }

    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// Render a JSON document, pretty-printed or compact
pub fn render_json(document: &JsonValue, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(rendered)
}

/// Write a JSON document to a file, with a trailing newline
pub fn write_json_file(path: &Path, document: &JsonValue, pretty: bool) -> Result<()> {
    let mut content = render_json(document, pretty)?;
    content.push('\n');
    std::fs::write(path, content).map_err(|e| ConvertError::io_error(path, e))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Print the run summary after writing files
pub fn print_summary(summary: &ConvertSummary, directory: &Path) {
    println!(
        "{} Converted {} resource(s) from {} input(s)",
        "✓".green(),
        summary.resources.to_string().bold(),
        summary.inputs
    );
    println!(
        "  Files written: {} ({})",
        summary.files_written,
        directory.display().to_string().cyan()
    );
    if summary.has_skipped() {
        println!("  Skipped: {}", summary.skipped.to_string().yellow());
    }
}
