//! Verification documents and submission consent

use serde::{Deserialize, Serialize};
use std::fmt;

use super::choices::{Choice, DocumentStatus};

/// Documents tracked on the status dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    FinancialStatement,
    Identification,
    NewAccountForm,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::FinancialStatement,
        DocumentKind::Identification,
        DocumentKind::NewAccountForm,
    ];

    /// Command-line tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FinancialStatement => "financial-statement",
            Self::Identification => "identification",
            Self::NewAccountForm => "new-account-form",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FinancialStatement => "Financial statement",
            Self::Identification => "Identification",
            Self::NewAccountForm => "New account form",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Upload state of every verification item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentStatuses {
    /// Government ID; the only upload required before review
    pub primary_id_uploaded: bool,
    pub financial_statement: DocumentStatus,
    pub identification: DocumentStatus,
    pub new_account_form: DocumentStatus,
}

impl DocumentStatuses {
    pub fn status(&self, kind: DocumentKind) -> DocumentStatus {
        match kind {
            DocumentKind::FinancialStatement => self.financial_statement,
            DocumentKind::Identification => self.identification,
            DocumentKind::NewAccountForm => self.new_account_form,
        }
    }

    pub fn set_status(&mut self, kind: DocumentKind, status: DocumentStatus) {
        let slot = match kind {
            DocumentKind::FinancialStatement => &mut self.financial_statement,
            DocumentKind::Identification => &mut self.identification,
            DocumentKind::NewAccountForm => &mut self.new_account_form,
        };
        *slot = status;
    }

    /// Uploading the primary ID also satisfies the identification item
    pub fn upload_primary_id(&mut self) {
        self.primary_id_uploaded = true;
        self.identification = DocumentStatus::Uploaded;
    }

    /// Tracked documents that are not uploaded yet, in display order
    pub fn pending(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.status(*kind) != DocumentStatus::Uploaded)
            .collect()
    }

    /// Status line for the primary ID
    pub fn primary_id_label(&self) -> &'static str {
        if self.primary_id_uploaded {
            DocumentStatus::Uploaded.label()
        } else {
            "Not uploaded"
        }
    }
}

/// Attestations required before submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Consent {
    /// Information provided is accurate
    pub accuracy: bool,
    /// Authorises compliance checks
    pub checks: bool,
}

impl Consent {
    pub fn is_given(&self) -> bool {
        self.accuracy && self.checks
    }
}
