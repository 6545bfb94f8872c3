//! Configuration module for onboard-cli
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OnboardPaths;
pub use settings::Settings;
