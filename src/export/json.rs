//! JSON report rendering.

use anyhow::Context;

use super::types::{Report, ReportRenderer};

/// Renders reports as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct JsonReport;

impl ReportRenderer for JsonReport {
    fn render(&self, report: &Report) -> anyhow::Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
