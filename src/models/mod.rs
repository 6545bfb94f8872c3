//! Core data models for onboard-cli
//!
//! This module contains the data structures collected by the onboarding
//! wizard: the record aggregate, its steps, and the closed option sets used by
//! its fields.

pub mod choices;
pub mod documents;
pub mod money;
pub mod portfolio;
pub mod profile;
pub mod record;
pub mod step;

pub use choices::{
    AccountType, Answer, Choice, CompletionMode, DocumentStatus, TaxIdType, WealthRange,
};
pub use documents::{Consent, DocumentKind, DocumentStatuses};
pub use money::Money;
pub use portfolio::PortfolioItem;
pub use profile::{EligibilityAnswers, FinancialProfile, InvestorProfile};
pub use record::{OnboardingRecord, RecordMeta};
pub use step::{Phase, Step};
