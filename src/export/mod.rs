//! Export module for onboard-cli
//!
//! Writes the current snapshot for hand-off or inspection:
//! - JSON: machine-readable
//! - YAML: human-readable, with a comment header

pub mod json;
pub mod yaml;

pub use json::{export_json, ExportSummary, OnboardingExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
