//! The onboarding wizard
//!
//! Step rules, the editable field registry, per-step copy, and the controller
//! that moves a session through the flow.

pub mod controller;
pub mod fields;
pub mod prompts;
pub mod validation;

pub use controller::{Transition, WizardController};
pub use fields::{Field, FieldKind};
pub use prompts::{header, primary_action, why_we_ask, StepHeader};
pub use validation::validate_step;
