//! Investor, eligibility and financial answers

use serde::{Deserialize, Serialize};

use super::choices::{Answer, TaxIdType, WealthRange};

/// Answers to the three eligibility questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EligibilityAnswers {
    /// Is the investor accredited?
    pub accredited: Option<Answer>,
    /// Comfortable with higher-risk investments?
    pub high_risk: Option<Answer>,
    /// Comfortable with illiquid investments?
    pub illiquid: Option<Answer>,
}

impl EligibilityAnswers {
    /// All three questions have an answer
    pub fn is_complete(&self) -> bool {
        self.accredited.is_some() && self.high_risk.is_some() && self.illiquid.is_some()
    }
}

/// Identity, contact and tax details of the investor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestorProfile {
    /// Legal or registered name
    pub legal_name: String,
    pub country: String,
    /// Street address
    pub address1: String,
    pub city: String,
    /// State or province
    pub state: String,
    /// ZIP or postal code
    pub zip: String,
    /// e.g. "LLC" or "Revocable Trust"; only asked for trust and entity accounts
    pub business_type: String,

    pub email_primary: String,
    pub email_secondary: String,
    pub phone_primary: String,
    pub phone_secondary: String,

    pub tax_id_type: Option<TaxIdType>,
    pub tax_id: String,
}

impl Default for InvestorProfile {
    fn default() -> Self {
        Self {
            legal_name: String::new(),
            country: "United States".to_string(),
            address1: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            business_type: String::new(),
            email_primary: String::new(),
            email_secondary: String::new(),
            phone_primary: String::new(),
            phone_secondary: String::new(),
            tax_id_type: Some(TaxIdType::default()),
            tax_id: String::new(),
        }
    }
}

impl InvestorProfile {
    /// Tax ID with all but the last four characters hidden
    pub fn masked_tax_id(&self) -> String {
        let chars: Vec<char> = self.tax_id.trim().chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let keep = chars.len().min(4);
        let hidden = chars.len() - keep;
        let mut masked: String = "•".repeat(hidden);
        masked.extend(&chars[hidden..]);
        masked
    }
}

/// Suitability ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialProfile {
    pub income_range: Option<WealthRange>,
    pub net_worth_range: Option<WealthRange>,
    pub liquid_assets_range: Option<WealthRange>,
    /// Free text, e.g. "24%"
    pub tax_bracket: String,
}
