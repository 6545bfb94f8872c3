//! Audit entry data structures
//!
//! Defines the wizard actions that reach disk and the journal line written
//! for each of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Step;

/// Persisted wizard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// Moved forward after validation
    Advance,
    /// Moved back one step
    Retreat,
    /// Direct jump (review edit links, dashboard shortcuts)
    Jump,
    /// Review confirmed and submitted
    Submit,
    /// Explicit save without navigation
    Save,
    /// Snapshot discarded
    Reset,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Advance => write!(f, "ADVANCE"),
            AuditAction::Retreat => write!(f, "RETREAT"),
            AuditAction::Jump => write!(f, "JUMP"),
            AuditAction::Submit => write!(f, "SUBMIT"),
            AuditAction::Save => write!(f, "SAVE"),
            AuditAction::Reset => write!(f, "RESET"),
        }
    }
}

/// A single journal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub action: AuditAction,

    /// Step before the action
    pub from: Step,

    /// Step after the action
    pub to: Step,
}

impl AuditEntry {
    pub fn new(action: AuditAction, from: Step, to: Step) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            from,
            to,
        }
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        if self.from == self.to {
            format!("{} {} at {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"), self.action, self.from)
        } else {
            format!(
                "{} {} {} -> {}",
                self.timestamp.format("%Y-%m-%d %H:%M:%S"),
                self.action,
                self.from,
                self.to
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let entry = AuditEntry::new(AuditAction::Advance, Step::Intro, Step::ModeChoice);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "advance");
        assert_eq!(value["from"], "intro");
        assert_eq!(value["to"], "mode_choice");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_summary() {
        let entry = AuditEntry::new(AuditAction::Save, Step::Contact, Step::Contact);
        assert!(entry.summary().ends_with("SAVE at contact"));

        let entry = AuditEntry::new(AuditAction::Retreat, Step::TaxId, Step::Contact);
        assert!(entry.summary().ends_with("RETREAT tax_id -> contact"));
    }
}
