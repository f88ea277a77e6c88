//! Error taxonomy for report generation.
//!
//! Validation failures carry exactly what was expected vs. found, so the
//! boundary layers can surface them verbatim. An unmapped plan label or a
//! missing logo is deliberately NOT in here - those are degraded-data
//! states handled by explicit `Raw`/`None` branches.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A required worksheet is absent from the uploaded workbook.
    #[error("Missing sheet(s): {missing}. Found sheets: {found}")]
    MissingSheets { missing: String, found: String },

    /// A sheet exists but lacks required columns.
    #[error("'{sheet}' is missing columns: {missing}")]
    MissingColumns { sheet: String, missing: String },

    /// The Premiums sheet has no column the label extractor recognizes.
    #[error("'Premiums' must have at least one plan-name-like column: {expected}")]
    NoPlanColumn { expected: String },

    /// The workbook bytes could not be parsed at all.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// Artifact write failure - fatal, no partial artifact is kept.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// True for errors caused by the uploaded file rather than this host.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ReportError::Io(_))
    }
}
