//! Plain-text report rendering.

use std::fmt::Write;

use chrono::{TimeZone, Utc};

use super::types::{Report, ReportRenderer};

/// Renders reports as a labeled plain-text document.
#[derive(Debug, Default)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, report: &Report) -> anyhow::Result<String> {
        let exported_at = Utc
            .timestamp_millis_opt(report.exported_at_ms)
            .single()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| report.exported_at_ms.to_string());

        let slots = &report.slots;
        let mut out = String::new();
        writeln!(out, "IP Lookup Report")?;
        writeln!(out, "================")?;
        writeln!(out)?;
        writeln!(out, "IP Address:   {}", slots.ip)?;
        writeln!(out, "Location:     {}", slots.location)?;
        writeln!(out, "Coordinates:  {}", slots.coordinates)?;
        writeln!(out, "ISP / Org:    {}", slots.organization)?;
        writeln!(out, "Timezone:     {}", slots.timezone)?;
        writeln!(out)?;
        writeln!(out, "Device")?;
        writeln!(out, "------")?;
        writeln!(out, "Browser:      {}", slots.browser)?;
        writeln!(out, "OS:           {}", slots.os)?;
        writeln!(out, "Device:       {}", slots.device)?;
        writeln!(out, "CPU:          {}", slots.cpu)?;
        writeln!(out, "Engine:       {}", slots.engine)?;
        writeln!(out)?;
        writeln!(out, "Exported at:  {exported_at}")?;
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
