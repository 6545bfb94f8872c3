//! Copy shown around each step: headers, context notes and action labels

use crate::models::Step;

/// Heading block above a step's form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepHeader {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub fn header(step: Step) -> StepHeader {
    let (kicker, title, subtitle) = match step {
        Step::Intro => (
            "Portfolio",
            "You're getting ready to invest",
            "We'll collect the information required to prepare your selected portfolio for purchase. You can save and return anytime.",
        ),
        Step::ModeChoice => (
            "Portfolio",
            "How do you want to complete onboarding?",
            "Choose a path. You can still schedule a call at any point.",
        ),
        Step::AccountType => (
            "Eligibility",
            "Who is investing?",
            "This determines required parties, documents, and signatures.",
        ),
        Step::Eligibility => (
            "Eligibility",
            "Quick eligibility check",
            "These answers help route your onboarding and confirm what opportunities are available.",
        ),
        Step::Identity => (
            "Investor",
            "Investor information",
            "Tell us who is investing and where they're based.",
        ),
        Step::Contact => (
            "Investor",
            "Contact details",
            "We'll use these to send status updates and coordinate next steps.",
        ),
        Step::TaxId => (
            "Investor",
            "Tax identification",
            "Required for compliant transaction processing.",
        ),
        Step::Financials => (
            "Financials",
            "Financial overview",
            "Used for suitability assessment for your selected investments.",
        ),
        Step::Documents => (
            "Verification",
            "Identity & documents",
            "Upload verification items. You can submit with pending documents.",
        ),
        Step::Review => (
            "Review",
            "Review & submit",
            "Confirm your details. You can edit any section before submission.",
        ),
        Step::Submitted => (
            "Submitted",
            "Submitted - We're reviewing your information",
            "We'll notify you when review is complete. Meanwhile, you can continue with next steps.",
        ),
    };
    StepHeader {
        kicker,
        title,
        subtitle,
    }
}

/// Context note for the "why we ask" dialog
pub fn why_we_ask(step: Step) -> &'static str {
    match step {
        Step::TaxId => {
            "Tax ID is used for compliance checks and preparing purchase documentation. It's stored securely."
        }
        Step::Documents => "Documents are used to verify identity and meet regulatory requirements.",
        Step::Financials => {
            "Financial ranges are used for suitability assessment. We use ranges to reduce friction."
        }
        _ => "We collect this information to support compliance, suitability, and a smooth transaction process.",
    }
}

/// Label of the button that advances the wizard
pub fn primary_action(step: Step) -> &'static str {
    match step {
        Step::Review => "Submit for review →",
        Step::Submitted => "Stay on dashboard",
        _ => "Continue →",
    }
}

/// What the wizard covers, shown on the intro screen
pub const INTRO_BULLETS: [&str; 3] = [
    "Confirm your portfolio and how you want to complete onboarding.",
    "Answer required investor and compliance questions.",
    "Upload verification documents and submit for review.",
];

/// What the eligibility answers influence
pub const ELIGIBILITY_EFFECTS: [&str; 3] = [
    "Which products you can access",
    "Which disclosures and documents are required",
    "How quickly we can move your selected portfolio forward",
];

/// Work done after submission, shown on the status dashboard
pub const REVIEW_ACTIVITIES: [&str; 3] = [
    "Reviewing investor information and disclosures",
    "Validating uploaded documents",
    "Preparing next steps for your selected portfolio",
];

pub const TYPICAL_REVIEW_TIME: &str = "Typical review time: 1-2 business days";

pub const ALL_DOCUMENTS_UPLOADED: &str =
    "All documents are uploaded. You're all set while we review.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_kicker_matches_phase() {
        for step in Step::ALL {
            assert_eq!(header(step).kicker, step.phase().name(), "{}", step);
        }
    }

    #[test]
    fn test_primary_action() {
        assert_eq!(primary_action(Step::Review), "Submit for review →");
        assert_eq!(primary_action(Step::Submitted), "Stay on dashboard");
        assert_eq!(primary_action(Step::Contact), "Continue →");
    }

    #[test]
    fn test_why_we_ask_specialised_steps() {
        let generic = why_we_ask(Step::Intro);
        assert_eq!(why_we_ask(Step::Contact), generic);
        assert_ne!(why_we_ask(Step::TaxId), generic);
        assert_ne!(why_we_ask(Step::Financials), generic);
        assert_ne!(why_we_ask(Step::Documents), generic);
    }
}
