//! Audit journal for onboard-cli
//!
//! Records every wizard action that rewrites the snapshot (advance, retreat,
//! jump, submit, save, reset) in an append-only JSONL file.

mod entry;
mod logger;

pub use entry::{AuditAction, AuditEntry};
pub use logger::AuditLogger;
