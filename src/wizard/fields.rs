//! Editable fields of the onboarding record
//!
//! Every user-editable value is reachable through a `Field`, so the terminal UI
//! and the `set` command share one place that knows how to read, write and
//! parse each field.

use std::fmt;

use crate::error::ValidationError;
use crate::models::{
    AccountType, Answer, Choice, CompletionMode, OnboardingRecord, Step, TaxIdType, WealthRange,
};

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text with an input placeholder
    Text { placeholder: &'static str },
    /// One of a fixed option list
    Select,
    /// On/off checkbox
    Toggle,
}

/// A user-editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompletionMode,
    AccountType,
    Accredited,
    HighRisk,
    Illiquid,
    LegalName,
    Country,
    Address1,
    City,
    State,
    Zip,
    BusinessType,
    EmailPrimary,
    EmailSecondary,
    PhonePrimary,
    PhoneSecondary,
    TaxIdType,
    TaxId,
    IncomeRange,
    NetWorthRange,
    LiquidAssetsRange,
    TaxBracket,
    ConsentAccuracy,
    ConsentChecks,
}

impl Field {
    pub const ALL: [Field; 24] = [
        Field::CompletionMode,
        Field::AccountType,
        Field::Accredited,
        Field::HighRisk,
        Field::Illiquid,
        Field::LegalName,
        Field::Country,
        Field::Address1,
        Field::City,
        Field::State,
        Field::Zip,
        Field::BusinessType,
        Field::EmailPrimary,
        Field::EmailSecondary,
        Field::PhonePrimary,
        Field::PhoneSecondary,
        Field::TaxIdType,
        Field::TaxId,
        Field::IncomeRange,
        Field::NetWorthRange,
        Field::LiquidAssetsRange,
        Field::TaxBracket,
        Field::ConsentAccuracy,
        Field::ConsentChecks,
    ];

    /// Command-line key
    pub fn key(self) -> &'static str {
        match self {
            Self::CompletionMode => "completion_mode",
            Self::AccountType => "account_type",
            Self::Accredited => "accredited",
            Self::HighRisk => "high_risk",
            Self::Illiquid => "illiquid",
            Self::LegalName => "legal_name",
            Self::Country => "country",
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::BusinessType => "business_type",
            Self::EmailPrimary => "email_primary",
            Self::EmailSecondary => "email_secondary",
            Self::PhonePrimary => "phone_primary",
            Self::PhoneSecondary => "phone_secondary",
            Self::TaxIdType => "tax_id_type",
            Self::TaxId => "tax_id",
            Self::IncomeRange => "income_range",
            Self::NetWorthRange => "net_worth_range",
            Self::LiquidAssetsRange => "liquid_assets_range",
            Self::TaxBracket => "tax_bracket",
            Self::ConsentAccuracy => "consent_accuracy",
            Self::ConsentChecks => "consent_checks",
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Self::CompletionMode => "How do you want to complete onboarding?",
            Self::AccountType => "Account type",
            Self::Accredited => "Are you an accredited investor?",
            Self::HighRisk => "Comfortable with higher-risk investments?",
            Self::Illiquid => "Comfortable with illiquid investments?",
            Self::LegalName => "Legal name / registered name",
            Self::Country => "Country",
            Self::Address1 => "Street address",
            Self::City => "City",
            Self::State => "State / province",
            Self::Zip => "ZIP / postal code",
            Self::BusinessType => "Business type (required for this account type)",
            Self::EmailPrimary => "Primary email",
            Self::EmailSecondary => "Secondary email (optional)",
            Self::PhonePrimary => "Primary phone",
            Self::PhoneSecondary => "Secondary phone (optional)",
            Self::TaxIdType => "Tax ID type",
            Self::TaxId => "Tax ID",
            Self::IncomeRange => "Annual income (range)",
            Self::NetWorthRange => "Net worth (range)",
            Self::LiquidAssetsRange => "Liquid assets (range)",
            Self::TaxBracket => "Tax bracket",
            Self::ConsentAccuracy => "I confirm the information provided is accurate.",
            Self::ConsentChecks => "I acknowledge required disclosures and consent to compliance checks.",
        }
    }

    /// Parse a command-line key; hyphens are accepted for underscores
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL.iter().copied().find(|field| field.key() == normalized)
    }

    /// The step whose form shows this field
    pub fn step(self) -> Step {
        match self {
            Self::CompletionMode => Step::ModeChoice,
            Self::AccountType => Step::AccountType,
            Self::Accredited | Self::HighRisk | Self::Illiquid => Step::Eligibility,
            Self::LegalName
            | Self::Country
            | Self::Address1
            | Self::City
            | Self::State
            | Self::Zip
            | Self::BusinessType => Step::Identity,
            Self::EmailPrimary | Self::EmailSecondary | Self::PhonePrimary | Self::PhoneSecondary => {
                Step::Contact
            }
            Self::TaxIdType | Self::TaxId => Step::TaxId,
            Self::IncomeRange | Self::NetWorthRange | Self::LiquidAssetsRange | Self::TaxBracket => {
                Step::Financials
            }
            Self::ConsentAccuracy | Self::ConsentChecks => Step::Review,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::CompletionMode
            | Self::AccountType
            | Self::Accredited
            | Self::HighRisk
            | Self::Illiquid
            | Self::TaxIdType
            | Self::IncomeRange
            | Self::NetWorthRange
            | Self::LiquidAssetsRange => FieldKind::Select,
            Self::ConsentAccuracy | Self::ConsentChecks => FieldKind::Toggle,
            Self::LegalName => FieldKind::Text {
                placeholder: "e.g., John A. Smith",
            },
            Self::Country => FieldKind::Text {
                placeholder: "e.g., United States",
            },
            Self::Address1 => FieldKind::Text {
                placeholder: "Street address",
            },
            Self::City => FieldKind::Text { placeholder: "City" },
            Self::State => FieldKind::Text { placeholder: "State" },
            Self::Zip => FieldKind::Text { placeholder: "ZIP" },
            Self::BusinessType => FieldKind::Text {
                placeholder: "e.g., LLC / Revocable Trust",
            },
            Self::EmailPrimary | Self::EmailSecondary => FieldKind::Text {
                placeholder: "name@domain.com",
            },
            Self::PhonePrimary | Self::PhoneSecondary => FieldKind::Text {
                placeholder: "+1 (555) 123-4567",
            },
            Self::TaxId => FieldKind::Text {
                placeholder: "XXX-XX-XXXX",
            },
            Self::TaxBracket => FieldKind::Text {
                placeholder: "e.g., 24%",
            },
        }
    }

    /// Input placeholder, adjusted to the record where it depends on another field
    pub fn placeholder(self, record: &OnboardingRecord) -> &'static str {
        match (self, self.kind()) {
            (Self::TaxId, _) => record
                .investor_profile
                .tax_id_type
                .unwrap_or_default()
                .placeholder(),
            (_, FieldKind::Text { placeholder }) => placeholder,
            (_, FieldKind::Select) => "Select…",
            (_, FieldKind::Toggle) => "",
        }
    }

    /// Whether the field is shown for this record
    pub fn is_visible(self, record: &OnboardingRecord) -> bool {
        match self {
            Self::BusinessType => record.requires_business_type(),
            _ => true,
        }
    }

    /// Whether the field must be filled before its step can be left
    pub fn is_required(self, record: &OnboardingRecord) -> bool {
        match self {
            Self::CompletionMode | Self::EmailSecondary | Self::PhoneSecondary => false,
            Self::BusinessType => record.requires_business_type(),
            _ => true,
        }
    }

    /// Visible fields of a step, in form order
    pub fn for_step(step: Step, record: &OnboardingRecord) -> Vec<Field> {
        Self::ALL
            .iter()
            .copied()
            .filter(|field| field.step() == step && field.is_visible(record))
            .collect()
    }

    /// Option labels for select fields, in display order
    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::CompletionMode => labels::<CompletionMode>(),
            Self::AccountType => labels::<AccountType>(),
            Self::Accredited | Self::HighRisk | Self::Illiquid => labels::<Answer>(),
            Self::TaxIdType => labels::<TaxIdType>(),
            Self::IncomeRange | Self::NetWorthRange | Self::LiquidAssetsRange => {
                labels::<WealthRange>()
            }
            _ => Vec::new(),
        }
    }

    /// Display value; empty when unset
    pub fn value(self, record: &OnboardingRecord) -> String {
        let investor = &record.investor_profile;
        let financials = &record.financial_profile;
        match self {
            Self::CompletionMode => record.completion_mode.label().to_string(),
            Self::AccountType => label_of(record.account_type),
            Self::Accredited => label_of(record.eligibility_answers.accredited),
            Self::HighRisk => label_of(record.eligibility_answers.high_risk),
            Self::Illiquid => label_of(record.eligibility_answers.illiquid),
            Self::LegalName => investor.legal_name.clone(),
            Self::Country => investor.country.clone(),
            Self::Address1 => investor.address1.clone(),
            Self::City => investor.city.clone(),
            Self::State => investor.state.clone(),
            Self::Zip => investor.zip.clone(),
            Self::BusinessType => investor.business_type.clone(),
            Self::EmailPrimary => investor.email_primary.clone(),
            Self::EmailSecondary => investor.email_secondary.clone(),
            Self::PhonePrimary => investor.phone_primary.clone(),
            Self::PhoneSecondary => investor.phone_secondary.clone(),
            Self::TaxIdType => label_of(investor.tax_id_type),
            Self::TaxId => investor.tax_id.clone(),
            Self::IncomeRange => label_of(financials.income_range),
            Self::NetWorthRange => label_of(financials.net_worth_range),
            Self::LiquidAssetsRange => label_of(financials.liquid_assets_range),
            Self::TaxBracket => financials.tax_bracket.clone(),
            Self::ConsentAccuracy => yes_no(record.consent.accuracy),
            Self::ConsentChecks => yes_no(record.consent.checks),
        }
    }

    /// Write a raw value into the record
    ///
    /// Text fields take the value as typed. Select fields accept an option tag
    /// or label; an empty value clears optional selects. Toggles accept
    /// yes/no, true/false, on/off and 1/0.
    pub fn set(self, record: &mut OnboardingRecord, raw: &str) -> Result<(), ValidationError> {
        let investor = &mut record.investor_profile;
        let financials = &mut record.financial_profile;
        match self {
            Self::CompletionMode => {
                record.completion_mode = parse_required(self, raw)?;
            }
            Self::AccountType => record.account_type = parse_optional(self, raw)?,
            Self::Accredited => record.eligibility_answers.accredited = parse_optional(self, raw)?,
            Self::HighRisk => record.eligibility_answers.high_risk = parse_optional(self, raw)?,
            Self::Illiquid => record.eligibility_answers.illiquid = parse_optional(self, raw)?,
            Self::LegalName => investor.legal_name = raw.to_string(),
            Self::Country => investor.country = raw.to_string(),
            Self::Address1 => investor.address1 = raw.to_string(),
            Self::City => investor.city = raw.to_string(),
            Self::State => investor.state = raw.to_string(),
            Self::Zip => investor.zip = raw.to_string(),
            Self::BusinessType => investor.business_type = raw.to_string(),
            Self::EmailPrimary => investor.email_primary = raw.to_string(),
            Self::EmailSecondary => investor.email_secondary = raw.to_string(),
            Self::PhonePrimary => investor.phone_primary = raw.to_string(),
            Self::PhoneSecondary => investor.phone_secondary = raw.to_string(),
            Self::TaxIdType => investor.tax_id_type = parse_optional(self, raw)?,
            Self::TaxId => investor.tax_id = raw.to_string(),
            Self::IncomeRange => financials.income_range = parse_optional(self, raw)?,
            Self::NetWorthRange => financials.net_worth_range = parse_optional(self, raw)?,
            Self::LiquidAssetsRange => financials.liquid_assets_range = parse_optional(self, raw)?,
            Self::TaxBracket => financials.tax_bracket = raw.to_string(),
            Self::ConsentAccuracy => record.consent.accuracy = parse_toggle(self, raw)?,
            Self::ConsentChecks => record.consent.checks = parse_toggle(self, raw)?,
        }
        Ok(())
    }

    /// Step a select field to its next (or previous) option, wrapping around
    ///
    /// An unset select moves to the first option going forward and to the
    /// last going backward. Toggles flip. Text fields are left alone.
    pub fn cycle(self, record: &mut OnboardingRecord, forward: bool) {
        match self.kind() {
            FieldKind::Text { .. } => {}
            FieldKind::Toggle => {
                let flipped = !matches!(self.value(record).as_str(), "Yes");
                let _ = self.set(record, if flipped { "yes" } else { "no" });
            }
            FieldKind::Select => {
                let options = self.options();
                if options.is_empty() {
                    return;
                }
                let current = self.value(record);
                let next = match options.iter().position(|label| *label == current) {
                    Some(i) if forward => (i + 1) % options.len(),
                    Some(i) => (i + options.len() - 1) % options.len(),
                    None if forward => 0,
                    None => options.len() - 1,
                };
                let _ = self.set(record, options[next]);
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn labels<C: Choice>() -> Vec<&'static str> {
    C::ALL.iter().map(|choice| choice.label()).collect()
}

fn label_of<C: Choice>(value: Option<C>) -> String {
    value.map(|choice| choice.label().to_string()).unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn invalid<C: Choice>(field: Field, raw: &str) -> ValidationError {
    ValidationError::InvalidChoice {
        field: field.key(),
        value: raw.to_string(),
        expected: C::expected(),
    }
}

fn parse_required<C: Choice>(field: Field, raw: &str) -> Result<C, ValidationError> {
    C::parse(raw).ok_or_else(|| invalid::<C>(field, raw))
}

fn parse_optional<C: Choice>(field: Field, raw: &str) -> Result<Option<C>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_required(field, raw).map(Some)
}

fn parse_toggle(field: Field, raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Ok(true),
        "no" | "n" | "false" | "off" | "0" => Ok(false),
        _ => Err(ValidationError::InvalidChoice {
            field: field.key(),
            value: raw.to_string(),
            expected: "yes, no".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_round_trips_through_parse() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.key()), Some(field));
        }
        assert_eq!(Field::parse("legal-name"), Some(Field::LegalName));
        assert_eq!(Field::parse("nickname"), None);
    }

    #[test]
    fn test_business_type_only_visible_for_trust_and_entity() {
        let mut record = OnboardingRecord::default();
        record.account_type = Some(AccountType::Individual);
        assert!(!Field::for_step(Step::Identity, &record).contains(&Field::BusinessType));

        record.account_type = Some(AccountType::Entity);
        let fields = Field::for_step(Step::Identity, &record);
        assert_eq!(fields.last(), Some(&Field::BusinessType));
        assert!(Field::BusinessType.is_required(&record));
    }

    #[test]
    fn test_set_text_and_select() {
        let mut record = OnboardingRecord::default();
        Field::LegalName.set(&mut record, "Jane Doe").unwrap();
        Field::AccountType.set(&mut record, "trust").unwrap();
        Field::IncomeRange.set(&mut record, "$100k–$250k").unwrap();

        assert_eq!(record.investor_profile.legal_name, "Jane Doe");
        assert_eq!(record.account_type, Some(AccountType::Trust));
        assert_eq!(
            record.financial_profile.income_range,
            Some(WealthRange::From100kTo250k)
        );
        assert_eq!(Field::IncomeRange.value(&record), "$100k–$250k");
    }

    #[test]
    fn test_set_rejects_unknown_option() {
        let mut record = OnboardingRecord::default();
        let err = Field::AccountType.set(&mut record, "partnership").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'partnership' for account_type. Valid values: individual, trust, entity"
        );
        assert!(record.account_type.is_none());
    }

    #[test]
    fn test_empty_value_clears_optional_select() {
        let mut record = OnboardingRecord::default();
        Field::TaxIdType.set(&mut record, "").unwrap();
        assert!(record.investor_profile.tax_id_type.is_none());
        assert!(Field::CompletionMode.set(&mut record, "").is_err());
    }

    #[test]
    fn test_toggle() {
        let mut record = OnboardingRecord::default();
        Field::ConsentChecks.set(&mut record, "true").unwrap();
        assert!(record.consent.checks);
        Field::ConsentChecks.cycle(&mut record, true);
        assert!(!record.consent.checks);
        assert!(Field::ConsentAccuracy.set(&mut record, "maybe").is_err());
    }

    #[test]
    fn test_cycle_select_wraps() {
        let mut record = OnboardingRecord::default();
        Field::AccountType.cycle(&mut record, true);
        assert_eq!(record.account_type, Some(AccountType::Individual));
        Field::AccountType.cycle(&mut record, false);
        assert_eq!(record.account_type, Some(AccountType::Entity));
        Field::AccountType.cycle(&mut record, true);
        assert_eq!(record.account_type, Some(AccountType::Individual));
    }

    #[test]
    fn test_tax_id_placeholder_follows_type() {
        let mut record = OnboardingRecord::default();
        assert_eq!(Field::TaxId.placeholder(&record), "XXX-XX-XXXX");
        record.investor_profile.tax_id_type = Some(TaxIdType::Ein);
        assert_eq!(Field::TaxId.placeholder(&record), "XX-XXXXXXX");
    }

    #[test]
    fn test_every_data_step_has_fields() {
        let record = OnboardingRecord::default();
        for step in [
            Step::ModeChoice,
            Step::AccountType,
            Step::Eligibility,
            Step::Identity,
            Step::Contact,
            Step::TaxId,
            Step::Financials,
            Step::Review,
        ] {
            assert!(!Field::for_step(step, &record).is_empty(), "{}", step);
        }
        assert!(Field::for_step(Step::Documents, &record).is_empty());
    }
}
