//! Export types and options.

use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;

use crate::present::DisplaySlots;

/// Built-in report formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain-text report for reading and printing
    Text,
    /// JSON report for programmatic processing
    Json,
}

/// A snapshot of the current lookup prepared for export.
///
/// Carries the same fixed display slots the presenter renders (including
/// the device slots) plus the export timestamp used in the file name.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The looked-up address
    pub ip: String,
    /// Export time in milliseconds since the epoch
    pub exported_at_ms: i64,
    /// The rendered display slots
    pub slots: DisplaySlots,
}

impl Report {
    /// Builds a report for the given slots, stamped with the current time.
    pub fn new(slots: DisplaySlots) -> Self {
        Self {
            ip: slots.ip.clone(),
            exported_at_ms: Utc::now().timestamp_millis(),
            slots,
        }
    }
}

/// External document-generation capability.
///
/// Implementations turn a [`Report`] into a document body; the caller picks
/// the output location and file name. When no renderer is configured,
/// export is reported unavailable rather than failing some other way.
pub trait ReportRenderer {
    /// Renders the report into a document body.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be produced.
    fn render(&self, report: &Report) -> anyhow::Result<String>;

    /// File extension for documents produced by this renderer.
    fn extension(&self) -> &'static str;
}
