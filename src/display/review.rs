//! Review summary formatting
//!
//! Groups the record into the sections shown before submission. Each section
//! knows which step its "Edit" link reopens.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Choice, OnboardingRecord, Step};

/// Placeholder for unset values
pub const EMPTY_VALUE: &str = "—";

/// One block of the review summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: &'static str,
    /// Step reopened by the section's edit link
    pub edit_step: Step,
    pub rows: Vec<(&'static str, String)>,
}

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Edit")]
    edit: &'static str,
}

fn or_empty(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        value.to_string()
    }
}

fn choice_or_empty<C: Choice>(value: Option<C>) -> String {
    value
        .map(|choice| choice.label().to_string())
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// Build the review sections for `record`
pub fn review_sections(record: &OnboardingRecord, mask_tax_id: bool) -> Vec<ReviewSection> {
    let investor = &record.investor_profile;
    let eligibility = &record.eligibility_answers;
    let financials = &record.financial_profile;
    let documents = &record.document_statuses;

    let tax_id = if mask_tax_id {
        investor.masked_tax_id()
    } else {
        investor.tax_id.clone()
    };

    let mut identity_rows = vec![
        ("Legal name", or_empty(&investor.legal_name)),
        (
            "Location",
            format!("{}, {}", or_empty(&investor.city), or_empty(&investor.state)),
        ),
        ("Email", or_empty(&investor.email_primary)),
        ("Phone", or_empty(&investor.phone_primary)),
    ];
    if record.requires_business_type() {
        identity_rows.insert(1, ("Business type", or_empty(&investor.business_type)));
    }

    vec![
        ReviewSection {
            title: "Portfolio",
            edit_step: Step::Intro,
            rows: vec![
                ("Investments", record.portfolio_items.len().to_string()),
                ("Total", record.portfolio_total().to_string()),
            ],
        },
        ReviewSection {
            title: "Eligibility",
            edit_step: Step::AccountType,
            rows: vec![
                ("Account type", choice_or_empty(record.account_type)),
                ("Accredited", choice_or_empty(eligibility.accredited)),
                ("Higher risk", choice_or_empty(eligibility.high_risk)),
                ("Illiquid", choice_or_empty(eligibility.illiquid)),
            ],
        },
        ReviewSection {
            title: "Investor details",
            edit_step: Step::Identity,
            rows: identity_rows,
        },
        ReviewSection {
            title: "Tax identification",
            edit_step: Step::TaxId,
            rows: vec![
                ("Type", choice_or_empty(investor.tax_id_type)),
                ("Tax ID", or_empty(&tax_id)),
            ],
        },
        ReviewSection {
            title: "Financials",
            edit_step: Step::Financials,
            rows: vec![
                ("Income", choice_or_empty(financials.income_range)),
                ("Net worth", choice_or_empty(financials.net_worth_range)),
                ("Liquid", choice_or_empty(financials.liquid_assets_range)),
                ("Tax bracket", or_empty(&financials.tax_bracket)),
            ],
        },
        ReviewSection {
            title: "Documents",
            edit_step: Step::Documents,
            rows: vec![
                ("Primary ID", documents.primary_id_label().to_string()),
                ("Pending", documents.pending().len().to_string()),
            ],
        },
    ]
}

/// Format the review summary as a table
pub fn format_review(record: &OnboardingRecord, mask_tax_id: bool) -> String {
    let rows: Vec<ReviewRow> = review_sections(record, mask_tax_id)
        .into_iter()
        .flat_map(|section| {
            let edit = section.edit_step.as_str();
            section
                .rows
                .into_iter()
                .enumerate()
                .map(move |(i, (item, value))| ReviewRow {
                    section: if i == 0 { section.title } else { "" },
                    item,
                    value,
                    edit: if i == 0 { edit } else { "" },
                })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let consent = &record.consent;
    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "[{}] I confirm the information provided is accurate.\n",
        if consent.accuracy { "x" } else { " " }
    ));
    output.push_str(&format!(
        "[{}] I acknowledge required disclosures and consent to compliance checks.\n",
        if consent.checks { "x" } else { " " }
    ));
    output
}
