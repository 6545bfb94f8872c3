//! Terminal User Interface module
//!
//! An interactive front end for the onboarding wizard built on ratatui. One
//! step is shown at a time, with the phase progress in the header and the
//! primary action below the form.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
