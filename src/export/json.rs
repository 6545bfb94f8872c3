//! JSON export
//!
//! Exports the onboarding snapshot wrapped in a small header carrying the
//! schema version and a progress summary.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OnboardError, OnboardResult};
use crate::models::{Money, OnboardingRecord, Step};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported snapshot with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: ExportSummary,

    pub record: OnboardingRecord,
}

/// Where the exported session stands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub step: Step,
    pub progress_percent: u16,
    pub submitted: bool,
    pub pending_documents: Vec<String>,
    pub portfolio_total: Money,
}

impl OnboardingExport {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        let summary = ExportSummary {
            step: record.step,
            progress_percent: record.step.phase().percent(),
            submitted: record.is_submitted(),
            pending_documents: record
                .document_statuses
                .pending()
                .into_iter()
                .map(|kind| kind.label().to_string())
                .collect(),
            portfolio_total: record.portfolio_total(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary,
            record: record.clone(),
        }
    }
}

/// Export the record as JSON
pub fn export_json<W: Write>(
    record: &OnboardingRecord,
    writer: &mut W,
    pretty: bool,
) -> OnboardResult<()> {
    let export = OnboardingExport::from_record(record);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| OnboardError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| OnboardError::Export(e.to_string()))?;
    Ok(())
}
