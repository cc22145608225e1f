//! Publish-time guard over message option declarations.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::publication::{
    adapters::json::parse_declaration,
    domain::{MessageOptionRecord, ValidationReport},
    error::DeclarationError,
    ports::validator::OptionsValidator,
    validation::DefaultOptionsValidator,
};

/// Service that admits a declaration only when its report is empty.
///
/// The guard never publishes. It hands back typed records that a publisher
/// may dispatch, or the report explaining why it must not.
#[derive(Clone)]
pub struct PublicationGuard<V>
where
    V: OptionsValidator,
{
    validator: Arc<V>,
}

impl<V> PublicationGuard<V>
where
    V: OptionsValidator,
{
    /// Creates a guard backed by `validator`.
    #[must_use]
    pub const fn new(validator: Arc<V>) -> Self {
        Self { validator }
    }

    /// Validates a raw declaration and returns its records.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationError::Rejected` carrying the validator's report
    /// when any rule fails.
    pub fn authorize(&self, options: &Value) -> Result<Vec<MessageOptionRecord>, DeclarationError> {
        let report = self.validator.validate(options);
        reject_if_failed(report)?;

        let records = MessageOptionRecord::list_from_value(options).unwrap_or_default();
        debug!(records = records.len(), "message options accepted");
        Ok(records)
    }

    /// Parses declaration text, then validates it.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationError::MalformedJson` if `raw` is not JSON, or
    /// `DeclarationError::Rejected` if validation fails.
    pub fn authorize_json(&self, raw: &str) -> Result<Vec<MessageOptionRecord>, DeclarationError> {
        let options = parse_declaration(raw).inspect_err(|error| {
            warn!(%error, "message options could not be parsed");
        })?;
        self.authorize(&options)
    }

    /// Validates records built in code.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationError::Rejected` when any rule fails.
    pub fn authorize_records(
        &self,
        records: Vec<MessageOptionRecord>,
    ) -> Result<Vec<MessageOptionRecord>, DeclarationError> {
        let report = self.validator.validate_records(&records);
        reject_if_failed(report)?;

        debug!(records = records.len(), "message options accepted");
        Ok(records)
    }
}

impl PublicationGuard<DefaultOptionsValidator> {
    /// Creates a guard using the default validator configuration.
    #[must_use]
    pub fn with_default_validator() -> Self {
        Self::new(Arc::new(DefaultOptionsValidator::new()))
    }
}

fn reject_if_failed(report: ValidationReport) -> Result<(), DeclarationError> {
    report.into_result().map_err(|failed| {
        warn!(failed_rules = failed.len(), report = %failed, "message options rejected");
        DeclarationError::Rejected(failed)
    })
}

// Note: Unit tests for PublicationGuard are located in
// src/publication/tests/guard_tests.rs.
