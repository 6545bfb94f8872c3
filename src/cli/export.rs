//! CLI command for snapshot export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{OnboardError, OnboardResult};
use crate::export::{export_json, export_yaml};
use crate::models::OnboardingRecord;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Write the record to `output`, or to stdout when no path is given
pub fn handle_export_command(
    record: &OnboardingRecord,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> OnboardResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                OnboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(record, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| OnboardError::Export(e.to_string()))?;
            println!("Snapshot exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(record, format, &mut writer, pretty)?;
        }
    }
    Ok(())
}

fn write_export<W: Write>(
    record: &OnboardingRecord,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> OnboardResult<()> {
    match format {
        ExportFormat::Json => export_json(record, writer, pretty),
        ExportFormat::Yaml => export_yaml(record, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.yaml");

        handle_export_command(
            &OnboardingRecord::default(),
            ExportFormat::Yaml,
            Some(path.clone()),
            false,
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("step: intro"));
    }
}
