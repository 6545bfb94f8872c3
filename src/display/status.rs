//! Session status and post-submission dashboard formatting

use chrono::{DateTime, Utc};

use crate::models::{OnboardingRecord, Step};
use crate::wizard::{header, primary_action, prompts};

use super::review::EMPTY_VALUE;

/// Format an optional timestamp, or a dash when unset
pub fn format_timestamp(at: Option<DateTime<Utc>>, date_format: &str) -> String {
    match at {
        Some(at) => at.format(date_format).to_string(),
        None => EMPTY_VALUE.to_string(),
    }
}

/// Text progress bar, `width` cells wide
pub fn format_bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Where the session stands: step, phase, branch and save time
pub fn format_status(record: &OnboardingRecord, date_format: &str) -> String {
    let step = record.step;
    let phase = step.phase();
    let step_header = header(step);

    let mut output = String::new();
    output.push_str(&format!("{}: {}\n", step_header.kicker, step_header.title));
    output.push_str(&format!("  {}\n\n", step_header.subtitle));
    output.push_str(&format!(
        "  Step:        {} ({}/{})\n",
        step.label(),
        step.index() + 1,
        Step::ALL.len()
    ));
    output.push_str(&format!(
        "  Progress:    {} {}% {}\n",
        format_bar(phase.percent(), 20),
        phase.percent(),
        phase.name()
    ));
    output.push_str(&format!("  Branch:      {}\n", record.branch_label()));
    output.push_str(&format!(
        "  Last saved:  {}\n",
        format_timestamp(record.meta.last_saved_at, date_format)
    ));
    if let Some(submitted_at) = record.meta.submitted_at {
        output.push_str(&format!(
            "  Submitted:   {}\n",
            submitted_at.format(date_format)
        ));
    }
    output.push_str(&format!("  Next action: {}\n", primary_action(step)));
    output
}

/// The status dashboard shown once the record is submitted
pub fn format_dashboard(record: &OnboardingRecord, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str("Status\n");
    output.push_str(&format!(
        "  ● Submitted ({})\n",
        format_timestamp(record.meta.submitted_at, date_format)
    ));
    output.push_str("  ○ Under review\n");
    output.push_str("  ○ Ready to proceed\n\n");

    output.push_str("What we're doing now\n");
    for activity in prompts::REVIEW_ACTIVITIES {
        output.push_str(&format!("  - {}\n", activity));
    }
    output.push_str(&format!("  {}\n\n", prompts::TYPICAL_REVIEW_TIME));

    let pending = record.document_statuses.pending();
    if pending.is_empty() {
        output.push_str(prompts::ALL_DOCUMENTS_UPLOADED);
        output.push('\n');
    } else {
        output.push_str("Pending documents\n");
        for kind in &pending {
            output.push_str(&format!("  - {}\n", kind));
        }
        output.push_str("  Run `onboard goto documents` to upload them.\n");
    }

    output.push_str(&format!(
        "\nPortfolio: {} investments, total {}\n",
        record.portfolio_items.len(),
        record.portfolio_total()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, DocumentKind, DocumentStatus};

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0, 10), "░".repeat(10));
        assert_eq!(format_bar(100, 10), "█".repeat(10));
        assert_eq!(format_bar(50, 4), "██░░");
    }

    #[test]
    fn test_format_timestamp_unset() {
        assert_eq!(format_timestamp(None, FORMAT), EMPTY_VALUE);
    }

    #[test]
    fn test_status_shows_phase_and_branch() {
        let mut record = OnboardingRecord::default();
        record.step = Step::Contact;
        record.account_type = Some(AccountType::Trust);

        let output = format_status(&record, FORMAT);
        assert!(output.contains("Contact details (6/11)"));
        assert!(output.contains("50% Investor"));
        assert!(output.contains("TRUST flow"));
        assert!(output.contains("Continue →"));
    }

    #[test]
    fn test_dashboard_lists_pending_documents() {
        let mut record = OnboardingRecord::default();
        record.step = Step::Submitted;
        record.document_statuses.upload_primary_id();

        let output = format_dashboard(&record, FORMAT);
        assert!(output.contains("Financial statement"));
        assert!(output.contains("New account form"));
        assert!(!output.contains("  - Identification"));

        record
            .document_statuses
            .set_status(DocumentKind::FinancialStatement, DocumentStatus::Uploaded);
        record
            .document_statuses
            .set_status(DocumentKind::NewAccountForm, DocumentStatus::Uploaded);
        let output = format_dashboard(&record, FORMAT);
        assert!(output.contains("All documents are uploaded"));
    }
}
