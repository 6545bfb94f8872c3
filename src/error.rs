//! Custom error types for onboard-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Step;

/// A blocked wizard transition or rejected field edit
///
/// Each variant carries exactly one human-readable message, shown inline
/// next to the form that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select who is investing to continue.")]
    AccountTypeMissing,

    #[error("Answer all three questions to continue.")]
    EligibilityIncomplete,

    #[error("Complete all required identity fields.")]
    IdentityIncomplete,

    #[error("Business type is required for Trust/Entity accounts.")]
    BusinessTypeMissing,

    #[error("Primary email and phone are required.")]
    ContactIncomplete,

    #[error("Tax ID type and Tax ID are required.")]
    TaxIdIncomplete,

    #[error("Complete all required financial fields.")]
    FinancialsIncomplete,

    #[error("Upload your Primary ID to continue.")]
    PrimaryIdMissing,

    #[error("Confirm both checkboxes to submit.")]
    ConsentMissing,

    /// A choice field was given a value outside its option list
    #[error("Invalid value '{value}' for {field}. Valid values: {expected}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    /// The step whose rules produced this error, if any
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::AccountTypeMissing => Some(Step::AccountType),
            Self::EligibilityIncomplete => Some(Step::Eligibility),
            Self::IdentityIncomplete | Self::BusinessTypeMissing => Some(Step::Identity),
            Self::ContactIncomplete => Some(Step::Contact),
            Self::TaxIdIncomplete => Some(Step::TaxId),
            Self::FinancialsIncomplete => Some(Step::Financials),
            Self::PrimaryIdMissing => Some(Step::Documents),
            Self::ConsentMissing => Some(Step::Review),
            Self::InvalidChoice { .. } => None,
        }
    }
}

/// The main error type for onboard-cli operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A transition was blocked by the current step's rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A direct jump that the navigation table does not allow
    #[error("Cannot move from {from} to {to}")]
    Navigation { from: Step, to: Step },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl OnboardError {
    /// Create a "not found" error for portfolio items
    pub fn portfolio_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Portfolio item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for field names
    pub fn field_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Field",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for step names
    pub fn step_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Step",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for onboard-cli operations
pub type OnboardResult<T> = Result<T, OnboardError>;
