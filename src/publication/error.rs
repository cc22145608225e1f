//! Error types for authorizing publication declarations.
//!
//! The validator itself returns reports as data. These errors are produced by
//! the guard and the JSON adapter, where callers want `?` propagation.

use thiserror::Error;

use super::domain::ValidationReport;

/// Errors that stop a declaration from being used for publishing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The declaration failed validation.
    #[error("message options rejected: {0}")]
    Rejected(ValidationReport),

    /// The declaration text is not valid JSON.
    #[error("malformed declaration JSON: {0}")]
    MalformedJson(String),

    /// The declaration could not be read.
    #[error("failed to read declaration: {0}")]
    Io(String),
}

impl DeclarationError {
    /// Creates a malformed JSON error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedJson(message.into())
    }

    /// Returns the validation report if the declaration was rejected.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected(report) => Some(report),
            Self::MalformedJson(_) | Self::Io(_) => None,
        }
    }

    /// Returns `true` if the declaration was rejected by validation.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<ValidationReport> for DeclarationError {
    fn from(report: ValidationReport) -> Self {
        Self::Rejected(report)
    }
}

impl From<serde_json::Error> for DeclarationError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::malformed(err.to_string())
        }
    }
}
