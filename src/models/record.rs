//! The onboarding record aggregate
//!
//! One `OnboardingRecord` holds everything the wizard collects. It is the unit
//! of persistence: the snapshot on disk is always a whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::choices::{AccountType, CompletionMode};
use super::documents::{Consent, DocumentStatuses};
use super::money::Money;
use super::portfolio::{default_portfolio, portfolio_total, PortfolioItem};
use super::profile::{EligibilityAnswers, FinancialProfile, InvestorProfile};
use super::step::Step;

/// Save and submission timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordMeta {
    pub last_saved_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Everything collected by the onboarding wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub meta: RecordMeta,

    /// The single active step
    pub step: Step,

    pub portfolio_items: Vec<PortfolioItem>,

    pub completion_mode: CompletionMode,

    /// Unset until the user picks who is investing
    pub account_type: Option<AccountType>,

    pub eligibility_answers: EligibilityAnswers,

    pub investor_profile: InvestorProfile,

    pub financial_profile: FinancialProfile,

    pub document_statuses: DocumentStatuses,

    pub consent: Consent,
}

impl Default for OnboardingRecord {
    fn default() -> Self {
        Self {
            meta: RecordMeta::default(),
            step: Step::default(),
            portfolio_items: default_portfolio(),
            completion_mode: CompletionMode::default(),
            account_type: None,
            eligibility_answers: EligibilityAnswers::default(),
            investor_profile: InvestorProfile::default(),
            financial_profile: FinancialProfile::default(),
            document_statuses: DocumentStatuses::default(),
            consent: Consent::default(),
        }
    }
}

impl OnboardingRecord {
    /// Total of all portfolio allocations
    pub fn portfolio_total(&self) -> Money {
        portfolio_total(&self.portfolio_items)
    }

    /// Look up a portfolio item by id
    pub fn portfolio_item_mut(&mut self, id: &str) -> Option<&mut PortfolioItem> {
        self.portfolio_items.iter_mut().find(|item| item.id == id)
    }

    /// Whether the trust/entity business-type field applies
    pub fn requires_business_type(&self) -> bool {
        self.account_type
            .is_some_and(AccountType::requires_business_type)
    }

    /// Label for the branch indicator
    pub fn branch_label(&self) -> String {
        match self.account_type {
            Some(account_type) => account_type.flow_label(),
            None => "Branch".to_string(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.step == Step::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::choices::Answer;

    #[test]
    fn test_defaults() {
        let record = OnboardingRecord::default();
        assert_eq!(record.step, Step::Intro);
        assert_eq!(record.completion_mode, CompletionMode::Online);
        assert!(record.account_type.is_none());
        assert!(record.meta.last_saved_at.is_none());
        assert_eq!(record.portfolio_total(), Money::from_dollars(810_000));
        assert_eq!(record.branch_label(), "Branch");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = OnboardingRecord::default();
        record.step = Step::Financials;
        record.account_type = Some(AccountType::Trust);
        record.eligibility_answers.accredited = Some(Answer::Yes);
        record.investor_profile.legal_name = "Smith Family Trust".into();
        record.meta.last_saved_at = Some(Utc::now());

        let json = serde_json::to_string(&record).unwrap();
        let restored: OnboardingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }

    #[test]
    fn test_snapshot_keys_are_camel_case() {
        let value = serde_json::to_value(OnboardingRecord::default()).unwrap();
        assert!(value.get("portfolioItems").is_some());
        assert!(value.get("eligibilityAnswers").is_some());
        assert!(value["meta"].get("lastSavedAt").is_some());
        assert!(value["documentStatuses"].get("primaryIdUploaded").is_some());
    }

    #[test]
    fn test_partial_snapshot_merges_over_defaults() {
        let record: OnboardingRecord =
            serde_json::from_str(r#"{"step":"contact","accountType":"entity"}"#).unwrap();
        assert_eq!(record.step, Step::Contact);
        assert_eq!(record.account_type, Some(AccountType::Entity));
        assert_eq!(record.portfolio_items.len(), 3);
        assert_eq!(record.investor_profile.country, "United States");
        assert!(record.requires_business_type());
    }
}
