//! Wizard steps and progress phases
//!
//! The onboarding flow is a fixed sequence of steps. Navigation is driven by
//! an explicit adjacency table rather than comparisons on step names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the onboarding flow
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Portfolio summary and what happens next
    #[default]
    Intro,
    /// Complete online or with a specialist
    ModeChoice,
    /// Who is investing
    AccountType,
    /// Accreditation and risk questions
    Eligibility,
    /// Legal name and address
    Identity,
    /// Email and phone
    Contact,
    /// Tax identification
    TaxId,
    /// Income, net worth, liquid assets, tax bracket
    Financials,
    /// Identity and document uploads
    Documents,
    /// Review and consent
    Review,
    /// Status dashboard after submission
    Submitted,
}

/// Forward edges of the flow. The backward map is the inverse of this table.
const TRANSITIONS: &[(Step, Step)] = &[
    (Step::Intro, Step::ModeChoice),
    (Step::ModeChoice, Step::AccountType),
    (Step::AccountType, Step::Eligibility),
    (Step::Eligibility, Step::Identity),
    (Step::Identity, Step::Contact),
    (Step::Contact, Step::TaxId),
    (Step::TaxId, Step::Financials),
    (Step::Financials, Step::Documents),
    (Step::Documents, Step::Review),
    (Step::Review, Step::Submitted),
];

impl Step {
    /// All steps in flow order
    pub const ALL: [Step; 11] = [
        Step::Intro,
        Step::ModeChoice,
        Step::AccountType,
        Step::Eligibility,
        Step::Identity,
        Step::Contact,
        Step::TaxId,
        Step::Financials,
        Step::Documents,
        Step::Review,
        Step::Submitted,
    ];

    /// The step that follows this one, `None` at `Submitted`
    pub fn next(self) -> Option<Step> {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
    }

    /// The step that precedes this one, `None` at `Intro`
    pub fn prev(self) -> Option<Step> {
        TRANSITIONS
            .iter()
            .find(|(_, to)| *to == self)
            .map(|(from, _)| *from)
    }

    /// Position in the flow (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the step can be reopened from the review screen
    pub fn is_editable_from_review(self) -> bool {
        self < Step::Review
    }

    /// Stable tag used in snapshots and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::ModeChoice => "mode_choice",
            Self::AccountType => "account_type",
            Self::Eligibility => "eligibility",
            Self::Identity => "identity",
            Self::Contact => "contact",
            Self::TaxId => "tax_id",
            Self::Financials => "financials",
            Self::Documents => "documents",
            Self::Review => "review",
            Self::Submitted => "submitted",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "Portfolio",
            Self::ModeChoice => "Completion mode",
            Self::AccountType => "Account type",
            Self::Eligibility => "Eligibility",
            Self::Identity => "Investor information",
            Self::Contact => "Contact details",
            Self::TaxId => "Tax identification",
            Self::Financials => "Financial overview",
            Self::Documents => "Identity & documents",
            Self::Review => "Review & submit",
            Self::Submitted => "Submitted",
        }
    }

    /// Parse a step from its tag
    ///
    /// Hyphens and case are ignored, so `tax-id`, `TAX_ID` and `tax_id` all
    /// resolve to the same step.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == normalized)
    }

    /// The progress phase this step belongs to
    pub fn phase(self) -> Phase {
        match self {
            Self::Intro | Self::ModeChoice => Phase::Portfolio,
            Self::AccountType | Self::Eligibility => Phase::Eligibility,
            Self::Identity | Self::Contact | Self::TaxId => Phase::Investor,
            Self::Financials => Phase::Financials,
            Self::Documents => Phase::Verification,
            Self::Review => Phase::Review,
            Self::Submitted => Phase::Submitted,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Group of steps sharing a progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Portfolio,
    Eligibility,
    Investor,
    Financials,
    Verification,
    Review,
    Submitted,
}

impl Phase {
    /// All phases in display order
    pub const ALL: [Phase; 7] = [
        Phase::Portfolio,
        Phase::Eligibility,
        Phase::Investor,
        Phase::Financials,
        Phase::Verification,
        Phase::Review,
        Phase::Submitted,
    ];

    /// Progress shown while in this phase
    pub fn percent(self) -> u16 {
        match self {
            Self::Portfolio => 10,
            Self::Eligibility => 30,
            Self::Investor => 50,
            Self::Financials => 70,
            Self::Verification => 82,
            Self::Review => 92,
            Self::Submitted => 100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio",
            Self::Eligibility => "Eligibility",
            Self::Investor => "Investor",
            Self::Financials => "Financials",
            Self::Verification => "Verification",
            Self::Review => "Review",
            Self::Submitted => "Submitted",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
