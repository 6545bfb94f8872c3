//! YAML export
//!
//! Same wrapper as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{OnboardError, OnboardResult};
use crate::export::json::OnboardingExport;
use crate::models::OnboardingRecord;

/// Export the record as YAML
pub fn export_yaml<W: Write>(record: &OnboardingRecord, writer: &mut W) -> OnboardResult<()> {
    let export = OnboardingExport::from_record(record);
    let to_export_err = |e: std::io::Error| OnboardError::Export(e.to_string());

    writeln!(writer, "# onboard-cli snapshot export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer, "#").map_err(to_export_err)?;
    writeln!(writer, "# Keep it secure - it contains your tax ID and contact details.")
        .map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| OnboardError::Export(e.to_string()))?;

    Ok(())
}
