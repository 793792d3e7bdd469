//! Report export.
//!
//! Turns the currently rendered lookup into a document on disk, named with
//! the looked-up address and the export timestamp. Document generation
//! itself is a capability behind [`ReportRenderer`]; text and JSON
//! renderers are built in.

mod json;
mod text;
mod types;

pub use json::JsonReport;
pub use text::TextReport;
pub use types::{ExportFormat, Report, ReportRenderer};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{TimeZone, Utc};
use log::info;

/// Returns the built-in renderer for `format`.
pub fn renderer_for(format: ExportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ExportFormat::Text => Box::new(TextReport),
        ExportFormat::Json => Box::new(JsonReport),
    }
}

/// Renders `report` and writes it under `dir`.
///
/// The file is named `ipscope_<ip>_<timestamp>.<ext>`; the directory is
/// created if needed.
///
/// # Errors
///
/// Returns an error if rendering fails or the document cannot be written.
pub fn write_report(
    report: &Report,
    dir: &Path,
    renderer: &dyn ReportRenderer,
) -> anyhow::Result<PathBuf> {
    let body = renderer.render(report)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let path = dir.join(report_file_name(
        &report.ip,
        report.exported_at_ms,
        renderer.extension(),
    ));
    fs::write(&path, body)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Report written to {}", path.display());
    Ok(path)
}

/// Builds the report file name from the address and export timestamp.
fn report_file_name(ip: &str, exported_at_ms: i64, extension: &str) -> String {
    let stamp = Utc
        .timestamp_millis_opt(exported_at_ms)
        .single()
        .map(|t| t.format("%Y%m%d_%H%M%S").to_string())
        .unwrap_or_else(|| exported_at_ms.to_string());
    format!("ipscope_{ip}_{stamp}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::classify_user_agent;
    use crate::lookup::LookupResult;
    use crate::present::DisplaySlots;
    use tempfile::TempDir;

    fn report() -> Report {
        let result = LookupResult {
            ip: "8.8.8.8".to_string(),
            city: Some("Mountain View".to_string()),
            region: None,
            country: Some("US".to_string()),
            coordinates: None,
            organization: None,
            timezone: None,
        };
        Report::new(DisplaySlots::build(&result, &classify_user_agent("")))
    }

    #[test]
    fn test_file_name_carries_ip_and_timestamp() {
        // 2024-01-01T00:00:00Z
        let name = report_file_name("8.8.8.8", 1704067200000, "txt");
        assert_eq!(name, "ipscope_8.8.8.8_20240101_000000.txt");
    }

    #[test]
    fn test_write_report_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("reports");

        let path = write_report(&report(), &out_dir, &TextReport).unwrap();
        assert!(path.exists());
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("8.8.8.8"));
    }

    #[test]
    fn test_renderer_for_extensions() {
        assert_eq!(renderer_for(ExportFormat::Text).extension(), "txt");
        assert_eq!(renderer_for(ExportFormat::Json).extension(), "json");
    }
}
