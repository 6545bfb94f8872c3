//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard controller.

pub mod export;
pub mod wizard;

pub use export::{handle_export_command, ExportFormat};
pub use wizard::{handle_wizard_command, WizardCommands};
