//! Wizard CLI commands
//!
//! Drive the onboarding session one command at a time. Edits are saved as
//! soon as they are applied, since each invocation is its own session.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_review, format_status};
use crate::error::{OnboardError, OnboardResult};
use crate::models::{DocumentKind, DocumentStatus, Step};
use crate::wizard::{Transition, WizardController};

/// Tag for the primary ID on `upload`
const PRIMARY_ID: &str = "primary-id";

/// Wizard subcommands
#[derive(Subcommand, Debug)]
pub enum WizardCommands {
    /// Show the current step and progress
    Status,

    /// Validate the current step and continue (submits at review)
    #[command(alias = "continue")]
    Next,

    /// Go back one step
    Back,

    /// Jump to a step (from review, or to documents after submitting)
    Goto {
        /// Step name (e.g., identity, tax-id, documents)
        step: String,
    },

    /// Set a field value
    Set {
        /// Field name (e.g., legal-name, account-type, income-range)
        field: String,
        /// New value; empty clears optional selections
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Mark a document as uploaded
    Upload {
        /// primary-id, financial-statement, identification or new-account-form
        document: String,
    },

    /// Mark a document as pending
    Pending {
        /// financial-statement, identification or new-account-form
        document: String,
    },

    /// Set a portfolio allocation
    Portfolio {
        /// Portfolio item ID
        id: String,
        /// Amount in whole dollars (e.g., "270,000")
        amount: String,
    },

    /// Save progress without moving
    Save,

    /// Discard saved progress and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the review summary
    Review,

    /// List editable fields and their values
    Fields {
        /// Only fields of this step
        #[arg(short, long)]
        step: Option<String>,
    },
}

/// Handle wizard commands
pub fn handle_wizard_command(
    wizard: &mut WizardController,
    settings: &Settings,
    cmd: WizardCommands,
) -> OnboardResult<()> {
    match cmd {
        WizardCommands::Status => {
            print!("{}", format_status(wizard.record(), &settings.date_format));
            if wizard.step() == Step::Submitted {
                println!();
                print!("{}", format_dashboard(wizard.record(), &settings.date_format));
            }
        }
        WizardCommands::Next => {
            let transition = wizard.advance()?;
            report_transition(wizard, settings, transition);
        }
        WizardCommands::Back => {
            let transition = wizard.retreat()?;
            if transition.moved() {
                println!("Back to: {}", transition.to.label());
            } else {
                println!("Already at the first step.");
            }
        }
        WizardCommands::Goto { step } => {
            let target = Step::parse(&step).ok_or_else(|| OnboardError::step_not_found(&step))?;
            let transition = wizard.jump_to(target)?;
            println!("Now at: {}", transition.to.label());
        }
        WizardCommands::Set { field, value } => {
            let field = wizard.set_field_by_key(&field, &value)?;
            wizard.save()?;
            let shown = field.value(wizard.record());
            if shown.is_empty() {
                println!("Cleared {}", field.key());
            } else {
                println!("{} = {}", field.key(), shown);
            }
        }
        WizardCommands::Upload { document } => {
            if is_primary_id(&document) {
                wizard.upload_primary_id();
                wizard.save()?;
                println!("Primary ID: Uploaded");
            } else {
                let kind = parse_document(&document)?;
                wizard.set_document_status(kind, DocumentStatus::Uploaded);
                wizard.save()?;
                println!("{}: Uploaded", kind);
            }
        }
        WizardCommands::Pending { document } => {
            let kind = parse_document(&document)?;
            wizard.set_document_status(kind, DocumentStatus::Pending);
            wizard.save()?;
            println!("{}: Pending", kind);
        }
        WizardCommands::Portfolio { id, amount } => {
            let amount = wizard.set_portfolio_amount(&id, &amount)?;
            wizard.save()?;
            println!("{} = {}", id, amount);
            println!("Total: {}", wizard.record().portfolio_total());
        }
        WizardCommands::Save => {
            let saved_at = wizard.save()?;
            println!("Progress saved ({}). You can resume anytime.", saved_at.format(&settings.date_format));
        }
        WizardCommands::Reset { yes } => {
            if !yes && !confirm("Discard all saved onboarding progress?")? {
                println!("Reset cancelled.");
                return Ok(());
            }
            wizard.reset()?;
            println!("Onboarding reset. Starting over at: {}", Step::Intro.label());
        }
        WizardCommands::Review => {
            print!("{}", format_review(wizard.record(), settings.mask_tax_id));
        }
        WizardCommands::Fields { step } => {
            let step = match step {
                Some(name) => Some(Step::parse(&name).ok_or_else(|| OnboardError::step_not_found(&name))?),
                None => None,
            };
            print!("{}", format_fields(wizard, step));
        }
    }

    Ok(())
}

fn report_transition(wizard: &WizardController, settings: &Settings, transition: Transition) {
    let record = wizard.record();
    match (transition.from, transition.to) {
        (Step::Submitted, _) => {
            println!("Already submitted. Progress saved.");
            print!("{}", format_dashboard(record, &settings.date_format));
        }
        (_, Step::Submitted) => {
            println!("Submitted for review.");
            println!();
            print!("{}", format_dashboard(record, &settings.date_format));
        }
        (_, to) => {
            println!("Continue to: {} ({}%)", to.label(), to.phase().percent());
        }
    }
}

fn format_fields(wizard: &WizardController, only: Option<Step>) -> String {
    let record = wizard.record();
    let mut output = String::new();
    for step in Step::ALL {
        if only.is_some_and(|only| only != step) {
            continue;
        }
        let fields = crate::wizard::Field::for_step(step, record);
        if fields.is_empty() {
            continue;
        }
        output.push_str(&format!("{}\n", step.label()));
        for field in fields {
            let marker = if field.is_required(record) { "*" } else { " " };
            output.push_str(&format!(
                "  {}{:<22} {}\n",
                marker,
                field.key(),
                field.value(record)
            ));
        }
    }
    output
}

fn is_primary_id(s: &str) -> bool {
    s.trim().to_lowercase().replace('_', "-") == PRIMARY_ID
}

fn parse_document(s: &str) -> OnboardResult<DocumentKind> {
    DocumentKind::parse(s).ok_or_else(|| OnboardError::NotFound {
        entity_type: "Document",
        identifier: s.to_string(),
    })
}

fn confirm(prompt: &str) -> OnboardResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
