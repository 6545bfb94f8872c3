//! Application state for the TUI
//!
//! The App struct owns the wizard session and all state needed for rendering
//! and handling events.

use crate::config::settings::Settings;
use crate::models::{DocumentKind, DocumentStatus, Step};
use crate::wizard::{Field, FieldKind, WizardController};

use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    WhyWeAsk,
    ConfirmReset,
    /// Editing the amount of the portfolio item at this index
    Portfolio(usize),
}

/// A selectable row on the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Field(Field),
    Portfolio(usize),
    PrimaryId,
    Document(DocumentKind),
    /// Review "Edit" link
    EditSection(Step),
    /// Dashboard shortcut back to the documents step
    UploadMissing,
}

/// Main application state
pub struct App<'a> {
    /// The onboarding session
    pub wizard: WizardController,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row on the current step
    pub selected_index: usize,

    /// Text being edited (field value or portfolio amount)
    pub input: TextInput,

    /// Validation message from the last blocked action
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(wizard: WizardController, settings: &'a Settings) -> Self {
        Self {
            wizard,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            input: TextInput::new(),
            error: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Rows the user can select on the current step, in display order
    pub fn items(&self) -> Vec<Item> {
        let record = self.wizard.record();
        match self.step() {
            Step::Intro => (0..record.portfolio_items.len()).map(Item::Portfolio).collect(),
            Step::Documents => std::iter::once(Item::PrimaryId)
                .chain(DocumentKind::ALL.iter().copied().map(Item::Document))
                .collect(),
            Step::Review => Field::for_step(Step::Review, record)
                .into_iter()
                .map(Item::Field)
                .chain(
                    crate::display::review_sections(record, self.settings.mask_tax_id)
                        .into_iter()
                        .map(|section| Item::EditSection(section.edit_step)),
                )
                .collect(),
            Step::Submitted => vec![Item::UploadMissing],
            step => Field::for_step(step, record)
                .into_iter()
                .map(Item::Field)
                .collect(),
        }
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.items().get(self.selected_index).copied()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.items().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if let ActiveDialog::Portfolio(index) = dialog {
            let amount = self
                .wizard
                .record()
                .portfolio_items
                .get(index)
                .map(|item| item.amount.dollars().to_string())
                .unwrap_or_default();
            self.input = TextInput::new()
                .label("Amount")
                .placeholder("270000")
                .content(amount)
                .focused(true);
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    // === Wizard actions ===

    /// Continue (or submit at review)
    pub fn advance(&mut self) {
        match self.wizard.advance() {
            Ok(transition) if transition.moved() => {
                self.on_step_changed();
                if transition.to == Step::Submitted {
                    self.set_status("Submitted for review");
                }
            }
            Ok(_) => self.set_status("Already submitted. Progress saved."),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn retreat(&mut self) {
        match self.wizard.retreat() {
            Ok(transition) if transition.moved() => self.on_step_changed(),
            Ok(_) => {}
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn jump_to(&mut self, step: Step) {
        match self.wizard.jump_to(step) {
            Ok(_) => self.on_step_changed(),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn save(&mut self) {
        match self.wizard.save() {
            Ok(_) => self.set_status("Progress saved. You can resume anytime."),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn reset(&mut self) {
        match self.wizard.reset() {
            Ok(_) => {
                self.on_step_changed();
                self.set_status("Onboarding reset");
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn on_step_changed(&mut self) {
        self.selected_index = 0;
        self.error = None;
        self.clear_status();
    }

    /// Act on the selected row: edit text, cycle options, or follow a link
    pub fn activate_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        match item {
            Item::Field(field) => match field.kind() {
                FieldKind::Text { .. } => self.begin_edit(field),
                FieldKind::Select | FieldKind::Toggle => self.wizard.cycle_field(field, true),
            },
            Item::Portfolio(index) => self.open_dialog(ActiveDialog::Portfolio(index)),
            Item::PrimaryId => {
                self.wizard.upload_primary_id();
                self.set_status("Primary ID uploaded");
            }
            Item::Document(kind) => {
                let status = match self.wizard.record().document_statuses.status(kind) {
                    DocumentStatus::Uploaded => DocumentStatus::Pending,
                    DocumentStatus::Pending => DocumentStatus::Uploaded,
                };
                self.wizard.set_document_status(kind, status);
            }
            Item::EditSection(step) => self.jump_to(step),
            Item::UploadMissing => self.jump_to(Step::Documents),
        }
    }

    /// Cycle the selected select/toggle field
    pub fn cycle_selected(&mut self, forward: bool) {
        if let Some(Item::Field(field)) = self.selected_item() {
            self.wizard.cycle_field(field, forward);
        }
    }

    /// Start editing a text field
    pub fn begin_edit(&mut self, field: Field) {
        let record = self.wizard.record();
        self.input = TextInput::new()
            .label(field.label())
            .placeholder(field.placeholder(record))
            .content(field.value(record))
            .focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Write the edited text back
    pub fn commit_edit(&mut self) {
        match (self.active_dialog, self.selected_item()) {
            (ActiveDialog::Portfolio(index), _) => {
                let id = self
                    .wizard
                    .record()
                    .portfolio_items
                    .get(index)
                    .map(|item| item.id.clone());
                if let Some(id) = id {
                    if let Err(err) = self.wizard.set_portfolio_amount(&id, self.input.value()) {
                        self.error = Some(err.to_string());
                    }
                }
                self.close_dialog();
            }
            (_, Some(Item::Field(field))) => {
                if let Err(err) = self.wizard.set_field(field, self.input.value()) {
                    self.error = Some(err.to_string());
                }
                self.input_mode = InputMode::Normal;
            }
            _ => self.input_mode = InputMode::Normal,
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.has_dialog() {
            self.close_dialog();
        } else {
            self.input_mode = InputMode::Normal;
        }
    }
}
