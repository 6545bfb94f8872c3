//! Wizard controller
//!
//! Owns the in-memory `OnboardingRecord` and is the only thing that moves the
//! wizard between steps. Every move that succeeds is written to the snapshot
//! store before it is reported, and journaled afterwards.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::config::paths::OnboardPaths;
use crate::error::{OnboardError, OnboardResult};
use crate::models::{DocumentKind, DocumentStatus, Money, OnboardingRecord, Step};
use crate::storage::{open_snapshot_store, SnapshotStore};

use super::fields::Field;
use super::validation::validate_step;

/// The step before and after a controller call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Step,
    pub to: Step,
}

impl Transition {
    fn stay(step: Step) -> Self {
        Self {
            from: step,
            to: step,
        }
    }

    /// Whether the step changed
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Drives one onboarding session
pub struct WizardController {
    store: SnapshotStore,
    audit: Option<AuditLogger>,
    record: OnboardingRecord,
}

impl WizardController {
    /// Resume from the store's snapshot, or start fresh
    pub fn new(store: SnapshotStore) -> Self {
        let record = store.load();
        Self {
            store,
            audit: None,
            record,
        }
    }

    /// Open the session stored under `paths`, journaling to its audit log
    pub fn open(paths: &OnboardPaths) -> OnboardResult<Self> {
        let store = open_snapshot_store(paths)?;
        Ok(Self::new(store).with_audit(AuditLogger::new(paths.audit_log())))
    }

    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    /// Direct access for edits; nothing is written until the next save or move
    pub fn record_mut(&mut self) -> &mut OnboardingRecord {
        &mut self.record
    }

    pub fn step(&self) -> Step {
        self.record.step
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    // === Navigation ===

    /// Validate the current step and move to the next one
    ///
    /// At `Review` this submits: `submittedAt` is stamped and the wizard lands
    /// on `Submitted`. At `Submitted` the wizard stays put and only saves.
    pub fn advance(&mut self) -> OnboardResult<Transition> {
        let from = self.record.step;
        let Some(to) = from.next() else {
            debug!(step = %from, "advance at final step saves in place");
            self.save()?;
            return Ok(Transition::stay(from));
        };

        if let Err(err) = validate_step(from, &self.record) {
            debug!(step = %from, error = %err, "advance blocked");
            return Err(err.into());
        }

        let now = Utc::now();
        if from == Step::Review {
            self.commit(AuditAction::Submit, |record| {
                record.meta.submitted_at = Some(now);
                record.step = to;
            })
        } else {
            self.commit(AuditAction::Advance, |record| {
                record.meta.last_saved_at = Some(now);
                record.step = to;
            })
        }
    }

    /// Move back one step without validating; a no-op at `Intro`
    pub fn retreat(&mut self) -> OnboardResult<Transition> {
        let from = self.record.step;
        match from.prev() {
            Some(to) => self.commit(AuditAction::Retreat, |record| record.step = to),
            None => Ok(Transition::stay(from)),
        }
    }

    /// Jump straight to `target`
    ///
    /// Allowed from `Review` to any earlier step and from `Submitted` back to
    /// `Documents`.
    pub fn jump_to(&mut self, target: Step) -> OnboardResult<Transition> {
        let from = self.record.step;
        let allowed = match from {
            Step::Review => target.is_editable_from_review(),
            Step::Submitted => target == Step::Documents,
            _ => false,
        };
        if !allowed {
            return Err(OnboardError::Navigation { from, to: target });
        }
        self.commit(AuditAction::Jump, |record| record.step = target)
    }

    /// Persist without moving; returns the new `lastSavedAt`
    pub fn save(&mut self) -> OnboardResult<DateTime<Utc>> {
        let now = Utc::now();
        self.commit(AuditAction::Save, |record| {
            record.meta.last_saved_at = Some(now)
        })?;
        Ok(now)
    }

    /// Discard the snapshot and start over
    pub fn reset(&mut self) -> OnboardResult<Transition> {
        let from = self.record.step;
        let removed = self.store.clear()?;
        self.record = OnboardingRecord::default();
        let transition = Transition {
            from,
            to: self.record.step,
        };
        info!(removed, from = %from, "onboarding reset");
        self.journal(AuditAction::Reset, transition);
        Ok(transition)
    }

    // === Edits ===

    pub fn set_field(&mut self, field: Field, value: &str) -> OnboardResult<()> {
        field.set(&mut self.record, value)?;
        debug!(field = %field, "field updated");
        Ok(())
    }

    /// Set a field addressed by its command-line key
    pub fn set_field_by_key(&mut self, key: &str, value: &str) -> OnboardResult<Field> {
        let field = Field::parse(key).ok_or_else(|| OnboardError::field_not_found(key))?;
        self.set_field(field, value)?;
        Ok(field)
    }

    pub fn cycle_field(&mut self, field: Field, forward: bool) {
        field.cycle(&mut self.record, forward);
    }

    pub fn upload_primary_id(&mut self) {
        self.record.document_statuses.upload_primary_id();
    }

    pub fn set_document_status(&mut self, kind: DocumentKind, status: DocumentStatus) {
        self.record.document_statuses.set_status(kind, status);
    }

    /// Set a portfolio allocation from loosely formatted text
    pub fn set_portfolio_amount(&mut self, id: &str, text: &str) -> OnboardResult<Money> {
        let item = self
            .record
            .portfolio_item_mut(id)
            .ok_or_else(|| OnboardError::portfolio_item_not_found(id))?;
        item.amount = Money::parse_lenient(text);
        Ok(item.amount)
    }

    // === Persistence ===

    /// Apply `mutate`, write the snapshot, then journal
    ///
    /// If the write fails the record is restored, so memory never runs ahead
    /// of disk.
    fn commit<F>(&mut self, action: AuditAction, mutate: F) -> OnboardResult<Transition>
    where
        F: FnOnce(&mut OnboardingRecord),
    {
        let previous = self.record.clone();
        mutate(&mut self.record);
        let transition = Transition {
            from: previous.step,
            to: self.record.step,
        };

        if let Err(err) = self.store.save(&self.record) {
            warn!(action = %action, error = %err, "snapshot write failed, rolling back");
            self.record = previous;
            return Err(err);
        }

        info!(action = %action, from = %transition.from, to = %transition.to, "wizard");
        self.journal(action, transition);
        Ok(transition)
    }

    fn journal(&self, action: AuditAction, transition: Transition) {
        let Some(audit) = &self.audit else {
            return;
        };
        let entry = AuditEntry::new(action, transition.from, transition.to);
        if let Err(err) = audit.log(&entry) {
            warn!(action = %action, error = %err, "audit journal write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::{AccountType, Answer, TaxIdType, WealthRange};
    use tempfile::TempDir;

    fn open(temp_dir: &TempDir) -> WizardController {
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        WizardController::open(&paths).unwrap()
    }

    /// Populate every required field for `account_type`
    fn fill_all(record: &mut OnboardingRecord, account_type: AccountType) {
        record.account_type = Some(account_type);
        record.eligibility_answers.accredited = Some(Answer::Yes);
        record.eligibility_answers.high_risk = Some(Answer::No);
        record.eligibility_answers.illiquid = Some(Answer::Yes);
        let investor = &mut record.investor_profile;
        investor.legal_name = "Jane Doe".into();
        investor.address1 = "1 Main St".into();
        investor.city = "Madison".into();
        investor.state = "WI".into();
        investor.zip = "53703".into();
        if account_type.requires_business_type() {
            investor.business_type = "Revocable Trust".into();
        }
        investor.email_primary = "jane@example.com".into();
        investor.phone_primary = "+1 555 123 4567".into();
        investor.tax_id_type = Some(TaxIdType::Ssn);
        investor.tax_id = "123-45-6789".into();
        let financials = &mut record.financial_profile;
        financials.income_range = Some(WealthRange::From100kTo250k);
        financials.net_worth_range = Some(WealthRange::From1mTo5m);
        financials.liquid_assets_range = Some(WealthRange::From250kTo500k);
        financials.tax_bracket = "24%".into();
        record.document_statuses.upload_primary_id();
        record.consent.accuracy = true;
        record.consent.checks = true;
    }

    fn walk_to(wizard: &mut WizardController, target: Step) {
        while wizard.step() != target {
            wizard.advance().unwrap();
        }
    }

    #[test]
    fn test_fresh_session_starts_at_intro() {
        let temp_dir = TempDir::new().unwrap();
        let wizard = open(&temp_dir);
        assert_eq!(wizard.step(), Step::Intro);
        assert!(!wizard.store().exists());
    }

    #[test]
    fn test_advance_follows_forward_map_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);

        let mut step = Step::Intro;
        while let Some(next) = step.next() {
            let transition = wizard.advance().unwrap();
            assert_eq!(transition, Transition { from: step, to: next });
            assert_eq!(&wizard.store().load(), wizard.record());
            step = next;
        }
        assert_eq!(wizard.step(), Step::Submitted);
    }

    #[test]
    fn test_failed_advance_leaves_step_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        walk_to(&mut wizard, Step::AccountType);
        let saved = wizard.store().load();

        let err = wizard.advance().unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::AccountTypeMissing));
        assert_eq!(wizard.step(), Step::AccountType);
        assert_eq!(wizard.store().load(), saved);
    }

    #[test]
    fn test_every_required_field_blocks() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);

        let clears: [(Step, fn(&mut OnboardingRecord)); 8] = [
            (Step::AccountType, |r| r.account_type = None),
            (Step::Eligibility, |r| r.eligibility_answers.illiquid = None),
            (Step::Identity, |r| r.investor_profile.zip.clear()),
            (Step::Contact, |r| r.investor_profile.phone_primary.clear()),
            (Step::TaxId, |r| r.investor_profile.tax_id.clear()),
            (Step::Financials, |r| r.financial_profile.tax_bracket.clear()),
            (Step::Documents, |r| r.document_statuses.primary_id_uploaded = false),
            (Step::Review, |r| r.consent.checks = false),
        ];

        for (step, clear) in clears {
            walk_to(&mut wizard, step);
            let filled = wizard.record().clone();
            clear(wizard.record_mut());
            assert!(wizard.advance().is_err(), "{} should block", step);
            assert_eq!(wizard.step(), step);
            *wizard.record_mut() = filled;
        }
    }

    #[test]
    fn test_individual_skips_business_type() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);
        walk_to(&mut wizard, Step::Identity);

        assert!(wizard.record().investor_profile.business_type.is_empty());
        assert_eq!(wizard.advance().unwrap().to, Step::Contact);
    }

    #[test]
    fn test_trust_requires_business_type() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Trust);
        walk_to(&mut wizard, Step::Identity);
        wizard.record_mut().investor_profile.business_type.clear();

        let err = wizard.advance().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Business type is required for Trust/Entity accounts."
        );
        assert_eq!(wizard.step(), Step::Identity);
    }

    #[test]
    fn test_submit_needs_both_consents() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);
        walk_to(&mut wizard, Step::Review);

        wizard.record_mut().consent.checks = false;
        assert!(wizard.advance().is_err());
        assert!(wizard.record().meta.submitted_at.is_none());

        wizard.set_field(Field::ConsentChecks, "yes").unwrap();
        let transition = wizard.advance().unwrap();
        assert_eq!(transition.to, Step::Submitted);
        assert!(wizard.record().meta.submitted_at.is_some());
        assert_eq!(wizard.store().load().step, Step::Submitted);
    }

    #[test]
    fn test_advance_at_submitted_stays_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);
        walk_to(&mut wizard, Step::Submitted);
        let submitted_at = wizard.record().meta.submitted_at;
        wizard.record_mut().meta.last_saved_at = None;

        let transition = wizard.advance().unwrap();
        assert!(!transition.moved());
        assert_eq!(wizard.step(), Step::Submitted);
        assert!(wizard.record().meta.last_saved_at.is_some());
        assert_eq!(wizard.record().meta.submitted_at, submitted_at);
        assert_eq!(&wizard.store().load(), wizard.record());
    }

    #[test]
    fn test_retreat_is_inverse_of_advance() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);
        walk_to(&mut wizard, Step::Submitted);

        let mut step = Step::Submitted;
        while let Some(prev) = step.prev() {
            let transition = wizard.retreat().unwrap();
            assert_eq!(transition, Transition { from: step, to: prev });
            assert_eq!(wizard.store().load().step, prev);
            step = prev;
        }

        let transition = wizard.retreat().unwrap();
        assert!(!transition.moved());
        assert_eq!(wizard.step(), Step::Intro);
    }

    #[test]
    fn test_retreat_at_intro_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        wizard.retreat().unwrap();
        assert!(!wizard.store().exists());
    }

    #[test]
    fn test_jump_rules() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);

        walk_to(&mut wizard, Step::Contact);
        assert!(matches!(
            wizard.jump_to(Step::Intro),
            Err(OnboardError::Navigation { .. })
        ));
        assert_eq!(wizard.step(), Step::Contact);

        walk_to(&mut wizard, Step::Review);
        assert_eq!(wizard.jump_to(Step::TaxId).unwrap().to, Step::TaxId);
        assert_eq!(wizard.store().load().step, Step::TaxId);

        walk_to(&mut wizard, Step::Review);
        assert!(wizard.jump_to(Step::Submitted).is_err());
        assert!(wizard.jump_to(Step::Review).is_err());

        walk_to(&mut wizard, Step::Submitted);
        assert!(wizard.jump_to(Step::Identity).is_err());
        assert_eq!(wizard.jump_to(Step::Documents).unwrap().to, Step::Documents);
    }

    #[test]
    fn test_save_keeps_step_and_stamps_time() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        wizard.set_field(Field::LegalName, "Jane Doe").unwrap();

        let saved_at = wizard.save().unwrap();
        let loaded = wizard.store().load();
        assert_eq!(loaded.step, Step::Intro);
        assert_eq!(loaded.meta.last_saved_at, Some(saved_at));
        assert_eq!(loaded.investor_profile.legal_name, "Jane Doe");
        assert!(loaded.meta.submitted_at.is_none());
    }

    #[test]
    fn test_field_edits_wait_for_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        wizard.save().unwrap();
        wizard.set_field_by_key("city", "Madison").unwrap();

        assert!(wizard.store().load().investor_profile.city.is_empty());
        assert!(wizard.set_field_by_key("nickname", "x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reset_removes_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Entity);
        walk_to(&mut wizard, Step::Contact);

        let transition = wizard.reset().unwrap();
        assert_eq!(transition, Transition { from: Step::Contact, to: Step::Intro });
        assert!(!wizard.store().exists());
        assert_eq!(wizard.record(), &OnboardingRecord::default());
    }

    #[test]
    fn test_session_resumes_from_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        fill_all(wizard.record_mut(), AccountType::Individual);
        walk_to(&mut wizard, Step::Financials);
        let expected = wizard.record().clone();
        drop(wizard);

        let resumed = open(&temp_dir);
        assert_eq!(resumed.record(), &expected);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);
        std::fs::create_dir_all(wizard.store().path()).unwrap();

        assert!(matches!(wizard.advance(), Err(OnboardError::Storage(_))));
        assert_eq!(wizard.step(), Step::Intro);
        assert!(wizard.record().meta.last_saved_at.is_none());
    }

    #[test]
    fn test_journal_gets_one_line_per_persisted_action() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);

        wizard.advance().unwrap();
        wizard.retreat().unwrap();
        wizard.retreat().unwrap();
        wizard.save().unwrap();
        wizard.reset().unwrap();

        let actions: Vec<AuditAction> = wizard
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|entry| entry.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                AuditAction::Advance,
                AuditAction::Retreat,
                AuditAction::Save,
                AuditAction::Reset
            ]
        );
    }

    #[test]
    fn test_documents_and_portfolio_edits() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);

        wizard.upload_primary_id();
        assert_eq!(
            wizard.record().document_statuses.pending(),
            vec![DocumentKind::FinancialStatement, DocumentKind::NewAccountForm]
        );
        wizard.set_document_status(DocumentKind::NewAccountForm, DocumentStatus::Uploaded);
        assert_eq!(
            wizard.record().document_statuses.pending(),
            vec![DocumentKind::FinancialStatement]
        );

        let amount = wizard.set_portfolio_amount("b", "$12,5x00").unwrap();
        assert_eq!(amount, Money::from_dollars(12_500));
        assert_eq!(wizard.record().portfolio_total(), Money::from_dollars(552_500));
        assert!(wizard.set_portfolio_amount("z", "1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_oversized_portfolio_amount_is_capped() {
        let temp_dir = TempDir::new().unwrap();
        let mut wizard = open(&temp_dir);

        let amount = wizard
            .set_portfolio_amount("a", "9223372036854775807")
            .unwrap();
        assert_eq!(amount, Money::MAX_INPUT);
        wizard.set_portfolio_amount("b", "9223372036854775807").unwrap();
        wizard.set_portfolio_amount("c", "9223372036854775807").unwrap();

        let total = wizard.record().portfolio_total();
        assert_eq!(total.dollars(), Money::MAX_INPUT.dollars() * 3);
        wizard.save().unwrap();
        assert_eq!(wizard.store().load().portfolio_total(), total);
    }
}
