//! Dialog overlays for the TUI

pub mod help;
pub mod portfolio;
pub mod reset;
pub mod why;
