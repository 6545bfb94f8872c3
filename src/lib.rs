//! onboard-cli - Terminal-based investor onboarding
//!
//! This library provides the core of the onboard-cli wizard: a linear,
//! resumable onboarding flow that walks an investor from choosing how to
//! complete onboarding through identity, tax and financial details, document
//! uploads, review and submission.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The onboarding record, steps and answer choices
//! - `wizard`: Step transitions, per-step validation and field editing
//! - `storage`: JSON snapshot persistence
//! - `audit`: Journal of wizard actions
//! - `display`: Plain-text status, review and dashboard output
//! - `export`: JSON and YAML snapshot export
//! - `cli`: Command handlers for one-shot use
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard_cli::config::paths::OnboardPaths;
//! use onboard_cli::wizard::WizardController;
//!
//! let paths = OnboardPaths::new()?;
//! let mut wizard = WizardController::open(&paths)?;
//! wizard.advance()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
pub mod tui;
pub mod wizard;

pub use error::{OnboardError, OnboardResult};
