//! Per-step required-field rules
//!
//! Each step that collects data has one rule. A rule either passes or yields
//! the single message shown to the user; it never mutates the record.

use crate::error::ValidationError;
use crate::models::{AccountType, OnboardingRecord, Step};

/// Empty after trimming
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check the rules of `step` against `record`
///
/// Steps without required fields (`Intro`, `ModeChoice`, `Submitted`) always
/// pass.
pub fn validate_step(step: Step, record: &OnboardingRecord) -> Result<(), ValidationError> {
    match step {
        Step::Intro | Step::ModeChoice | Step::Submitted => Ok(()),
        Step::AccountType => validate_account_type(record),
        Step::Eligibility => validate_eligibility(record),
        Step::Identity => validate_identity(record),
        Step::Contact => validate_contact(record),
        Step::TaxId => validate_tax_id(record),
        Step::Financials => validate_financials(record),
        Step::Documents => validate_documents(record),
        Step::Review => validate_review(record),
    }
}

fn validate_account_type(record: &OnboardingRecord) -> Result<(), ValidationError> {
    match record.account_type {
        Some(_) => Ok(()),
        None => Err(ValidationError::AccountTypeMissing),
    }
}

fn validate_eligibility(record: &OnboardingRecord) -> Result<(), ValidationError> {
    if record.eligibility_answers.is_complete() {
        Ok(())
    } else {
        Err(ValidationError::EligibilityIncomplete)
    }
}

fn validate_identity(record: &OnboardingRecord) -> Result<(), ValidationError> {
    let investor = &record.investor_profile;
    let base = [
        &investor.legal_name,
        &investor.country,
        &investor.address1,
        &investor.city,
        &investor.state,
        &investor.zip,
    ];
    if base.iter().any(|value| is_blank(value)) {
        return Err(ValidationError::IdentityIncomplete);
    }

    match record.account_type {
        Some(AccountType::Trust | AccountType::Entity) if is_blank(&investor.business_type) => {
            Err(ValidationError::BusinessTypeMissing)
        }
        Some(AccountType::Individual | AccountType::Trust | AccountType::Entity) | None => Ok(()),
    }
}

fn validate_contact(record: &OnboardingRecord) -> Result<(), ValidationError> {
    let investor = &record.investor_profile;
    if is_blank(&investor.email_primary) || is_blank(&investor.phone_primary) {
        Err(ValidationError::ContactIncomplete)
    } else {
        Ok(())
    }
}

fn validate_tax_id(record: &OnboardingRecord) -> Result<(), ValidationError> {
    let investor = &record.investor_profile;
    if investor.tax_id_type.is_none() || is_blank(&investor.tax_id) {
        Err(ValidationError::TaxIdIncomplete)
    } else {
        Ok(())
    }
}

fn validate_financials(record: &OnboardingRecord) -> Result<(), ValidationError> {
    let financials = &record.financial_profile;
    let complete = financials.income_range.is_some()
        && financials.net_worth_range.is_some()
        && financials.liquid_assets_range.is_some()
        && !is_blank(&financials.tax_bracket);
    if complete {
        Ok(())
    } else {
        Err(ValidationError::FinancialsIncomplete)
    }
}

fn validate_documents(record: &OnboardingRecord) -> Result<(), ValidationError> {
    if record.document_statuses.primary_id_uploaded {
        Ok(())
    } else {
        Err(ValidationError::PrimaryIdMissing)
    }
}

fn validate_review(record: &OnboardingRecord) -> Result<(), ValidationError> {
    if record.consent.is_given() {
        Ok(())
    } else {
        Err(ValidationError::ConsentMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, TaxIdType, WealthRange};

    fn identity_filled(account_type: AccountType) -> OnboardingRecord {
        let mut record = OnboardingRecord::default();
        record.account_type = Some(account_type);
        let investor = &mut record.investor_profile;
        investor.legal_name = "Jane Doe".into();
        investor.address1 = "1 Main St".into();
        investor.city = "Madison".into();
        investor.state = "WI".into();
        investor.zip = "53703".into();
        record
    }

    #[test]
    fn test_steps_without_rules_pass() {
        let record = OnboardingRecord::default();
        assert!(validate_step(Step::Intro, &record).is_ok());
        assert!(validate_step(Step::ModeChoice, &record).is_ok());
        assert!(validate_step(Step::Submitted, &record).is_ok());
    }

    #[test]
    fn test_account_type_required() {
        let mut record = OnboardingRecord::default();
        assert_eq!(
            validate_step(Step::AccountType, &record),
            Err(ValidationError::AccountTypeMissing)
        );
        record.account_type = Some(AccountType::Individual);
        assert!(validate_step(Step::AccountType, &record).is_ok());
    }

    #[test]
    fn test_eligibility_requires_all_three() {
        let mut record = OnboardingRecord::default();
        record.eligibility_answers.accredited = Some(Answer::Yes);
        record.eligibility_answers.high_risk = Some(Answer::No);
        assert_eq!(
            validate_step(Step::Eligibility, &record),
            Err(ValidationError::EligibilityIncomplete)
        );
        record.eligibility_answers.illiquid = Some(Answer::No);
        assert!(validate_step(Step::Eligibility, &record).is_ok());
    }

    #[test]
    fn test_identity_individual_skips_business_type() {
        let record = identity_filled(AccountType::Individual);
        assert!(validate_step(Step::Identity, &record).is_ok());
    }

    #[test]
    fn test_identity_trust_and_entity_need_business_type() {
        for account_type in [AccountType::Trust, AccountType::Entity] {
            let mut record = identity_filled(account_type);
            assert_eq!(
                validate_step(Step::Identity, &record),
                Err(ValidationError::BusinessTypeMissing)
            );
            record.investor_profile.business_type = "   ".into();
            assert_eq!(
                validate_step(Step::Identity, &record),
                Err(ValidationError::BusinessTypeMissing)
            );
            record.investor_profile.business_type = "LLC".into();
            assert!(validate_step(Step::Identity, &record).is_ok());
        }
    }

    #[test]
    fn test_identity_base_fields_checked_first() {
        let mut record = identity_filled(AccountType::Trust);
        record.investor_profile.country = " ".into();
        assert_eq!(
            validate_step(Step::Identity, &record),
            Err(ValidationError::IdentityIncomplete)
        );
    }

    #[test]
    fn test_contact() {
        let mut record = OnboardingRecord::default();
        record.investor_profile.email_primary = "jane@example.com".into();
        assert_eq!(
            validate_step(Step::Contact, &record),
            Err(ValidationError::ContactIncomplete)
        );
        record.investor_profile.phone_primary = "+1 555 123 4567".into();
        assert!(validate_step(Step::Contact, &record).is_ok());
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let mut record = OnboardingRecord::default();
        record.investor_profile.email_primary = "   ".into();
        record.investor_profile.phone_primary = "+1 555 123 4567".into();
        assert_eq!(
            validate_step(Step::Contact, &record),
            Err(ValidationError::ContactIncomplete)
        );

        record.investor_profile.tax_id_type = Some(TaxIdType::Ssn);
        record.investor_profile.tax_id = "\t ".into();
        assert_eq!(
            validate_step(Step::TaxId, &record),
            Err(ValidationError::TaxIdIncomplete)
        );
    }

    #[test]
    fn test_tax_id() {
        let mut record = OnboardingRecord::default();
        assert_eq!(
            validate_step(Step::TaxId, &record),
            Err(ValidationError::TaxIdIncomplete)
        );
        record.investor_profile.tax_id = "12-3456789".into();
        record.investor_profile.tax_id_type = None;
        assert_eq!(
            validate_step(Step::TaxId, &record),
            Err(ValidationError::TaxIdIncomplete)
        );
        record.investor_profile.tax_id_type = Some(TaxIdType::Ein);
        assert!(validate_step(Step::TaxId, &record).is_ok());
    }

    #[test]
    fn test_financials() {
        let mut record = OnboardingRecord::default();
        let financials = &mut record.financial_profile;
        financials.income_range = Some(WealthRange::From100kTo250k);
        financials.net_worth_range = Some(WealthRange::From1mTo5m);
        financials.liquid_assets_range = Some(WealthRange::From250kTo500k);
        assert_eq!(
            validate_step(Step::Financials, &record),
            Err(ValidationError::FinancialsIncomplete)
        );
        record.financial_profile.tax_bracket = "24%".into();
        assert!(validate_step(Step::Financials, &record).is_ok());
    }

    #[test]
    fn test_documents_need_primary_id_only() {
        let mut record = OnboardingRecord::default();
        assert_eq!(
            validate_step(Step::Documents, &record),
            Err(ValidationError::PrimaryIdMissing)
        );
        record.document_statuses.primary_id_uploaded = true;
        assert!(validate_step(Step::Documents, &record).is_ok());
        assert!(!record.document_statuses.pending().is_empty());
    }

    #[test]
    fn test_review_needs_both_consents() {
        let mut record = OnboardingRecord::default();
        record.consent.accuracy = true;
        assert_eq!(
            validate_step(Step::Review, &record),
            Err(ValidationError::ConsentMissing)
        );
        record.consent.checks = true;
        assert!(validate_step(Step::Review, &record).is_ok());
    }
}
