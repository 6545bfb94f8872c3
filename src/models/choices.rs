//! Closed option sets for select, radio and status fields
//!
//! Every multiple-choice field in the onboarding record is one of these enums
//! rather than a free-form string, so validators and renderers can match on
//! them exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common behaviour of option enums
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Stable tag used on the command line
    fn as_str(self) -> &'static str;

    /// Display text
    fn label(self) -> &'static str;

    /// Parse from a tag or a label, ignoring case
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.iter().copied().find(|choice| {
            choice.as_str().eq_ignore_ascii_case(s) || choice.label().eq_ignore_ascii_case(s)
        })
    }

    /// Comma-separated list of accepted tags, for error messages
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|choice| choice.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Who is investing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Individual,
    Trust,
    Entity,
}

impl AccountType {
    /// Trust and entity accounts must name their business type
    pub fn requires_business_type(self) -> bool {
        match self {
            Self::Individual => false,
            Self::Trust | Self::Entity => true,
        }
    }

    /// Label for the branch indicator in the header
    pub fn flow_label(self) -> String {
        format!("{} flow", self.as_str().to_uppercase())
    }
}

impl Choice for AccountType {
    const ALL: &'static [Self] = &[Self::Individual, Self::Trust, Self::Entity];

    fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Trust => "trust",
            Self::Entity => "entity",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Trust => "Trust",
            Self::Entity => "Entity",
        }
    }
}

/// How the user wants to complete onboarding. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompletionMode {
    /// Self-service, save and resume anytime
    #[default]
    Online,
    /// Assisted by a specialist over a call
    Specialist,
}

impl CompletionMode {
    pub fn description(self) -> &'static str {
        match self {
            Self::Online => "Finish at your own pace. Save and resume anytime.",
            Self::Specialist => "Schedule a short call. We'll guide you through required steps.",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Online => "Recommended",
            Self::Specialist => "Assisted",
        }
    }
}

impl Choice for CompletionMode {
    const ALL: &'static [Self] = &[Self::Online, Self::Specialist];

    fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Specialist => "specialist",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Online => "Complete online",
            Self::Specialist => "Complete with a specialist",
        }
    }
}

/// Answer to a yes/no eligibility question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Choice for Answer {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Kind of tax identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxIdType {
    #[default]
    Ssn,
    Ein,
}

impl TaxIdType {
    /// Input placeholder showing the expected shape
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Ssn => "XXX-XX-XXXX",
            Self::Ein => "XX-XXXXXXX",
        }
    }
}

impl Choice for TaxIdType {
    const ALL: &'static [Self] = &[Self::Ssn, Self::Ein];

    fn as_str(self) -> &'static str {
        match self {
            Self::Ssn => "ssn",
            Self::Ein => "ein",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ssn => "SSN",
            Self::Ein => "EIN",
        }
    }
}

/// Dollar band used for income, net worth and liquid assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WealthRange {
    #[serde(rename = "under_50k")]
    Under50k,
    #[serde(rename = "50k_100k")]
    From50kTo100k,
    #[serde(rename = "100k_250k")]
    From100kTo250k,
    #[serde(rename = "250k_500k")]
    From250kTo500k,
    #[serde(rename = "500k_1m")]
    From500kTo1m,
    #[serde(rename = "1m_5m")]
    From1mTo5m,
    #[serde(rename = "over_5m")]
    Over5m,
}

impl Choice for WealthRange {
    const ALL: &'static [Self] = &[
        Self::Under50k,
        Self::From50kTo100k,
        Self::From100kTo250k,
        Self::From250kTo500k,
        Self::From500kTo1m,
        Self::From1mTo5m,
        Self::Over5m,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Under50k => "under_50k",
            Self::From50kTo100k => "50k_100k",
            Self::From100kTo250k => "100k_250k",
            Self::From250kTo500k => "250k_500k",
            Self::From500kTo1m => "500k_1m",
            Self::From1mTo5m => "1m_5m",
            Self::Over5m => "over_5m",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Under50k => "< $50k",
            Self::From50kTo100k => "$50k–$100k",
            Self::From100kTo250k => "$100k–$250k",
            Self::From250kTo500k => "$250k–$500k",
            Self::From500kTo1m => "$500k–$1M",
            Self::From1mTo5m => "$1M–$5M",
            Self::Over5m => "> $5M",
        }
    }
}

/// Upload state of a verification document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    #[default]
    Pending,
    Uploaded,
}

impl Choice for DocumentStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Uploaded];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Uploaded => "uploaded",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Uploaded => "Uploaded",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(
    AccountType,
    CompletionMode,
    Answer,
    TaxIdType,
    WealthRange,
    DocumentStatus
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_tag_and_label() {
        assert_eq!(AccountType::parse("trust"), Some(AccountType::Trust));
        assert_eq!(AccountType::parse("Entity"), Some(AccountType::Entity));
        assert_eq!(AccountType::parse("llc"), None);
        assert_eq!(WealthRange::parse("$1M–$5M"), Some(WealthRange::From1mTo5m));
        assert_eq!(WealthRange::parse("over_5m"), Some(WealthRange::Over5m));
        assert_eq!(TaxIdType::parse("EIN"), Some(TaxIdType::Ein));
        assert_eq!(Answer::parse("YES"), Some(Answer::Yes));
    }

    #[test]
    fn test_business_type_branch() {
        assert!(!AccountType::Individual.requires_business_type());
        assert!(AccountType::Trust.requires_business_type());
        assert!(AccountType::Entity.requires_business_type());
    }

    #[test]
    fn test_flow_label() {
        assert_eq!(AccountType::Trust.flow_label(), "TRUST flow");
        assert_eq!(AccountType::Individual.flow_label(), "INDIVIDUAL flow");
    }

    #[test]
    fn test_expected_lists_tags() {
        assert_eq!(AccountType::expected(), "individual, trust, entity");
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&TaxIdType::Ssn).unwrap(), "\"SSN\"");
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Uploaded).unwrap(),
            "\"Uploaded\""
        );
        assert_eq!(
            serde_json::to_string(&WealthRange::From500kTo1m).unwrap(),
            "\"500k_1m\""
        );
        assert_eq!(
            serde_json::to_string(&CompletionMode::Specialist).unwrap(),
            "\"specialist\""
        );
    }
}
