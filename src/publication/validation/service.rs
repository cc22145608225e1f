//! Validation service implementation.
//!
//! Provides the default implementation of the `OptionsValidator` port,
//! combining the individual rules into one report.

use serde_json::Value;

use crate::publication::{
    domain::{MessageOptionRecord, RuleViolation, ValidationReport},
    ports::validator::{OptionsValidator, ValidationConfig},
    validation::rules,
};

/// Default implementation of the options validator.
///
/// A container shape failure ends validation immediately. Otherwise every
/// per-record rule runs and each failing rule adds one report entry.
///
/// # Examples
///
/// ```
/// use pheromone::publication::domain::RuleKey;
/// use pheromone::publication::ports::validator::OptionsValidator;
/// use pheromone::publication::validation::service::DefaultOptionsValidator;
/// use serde_json::json;
///
/// let validator = DefaultOptionsValidator::new();
///
/// let report = validator.validate(&json!([
///     {"topic": "orders", "event_types": ["create"], "message": "body"}
/// ]));
/// assert!(report.is_empty());
///
/// let report = validator.validate(&json!([{"event_types": ["create"], "message": "body"}]));
/// assert_eq!(report.get(RuleKey::Topic), Some("Topic name missing"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultOptionsValidator {
    config: ValidationConfig,
}

impl DefaultOptionsValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl OptionsValidator for DefaultOptionsValidator {
    fn validate(&self, options: &Value) -> ValidationReport {
        match rules::validate_container(options) {
            Ok(items) => {
                let records: Vec<MessageOptionRecord> =
                    items.iter().map(MessageOptionRecord::from_value).collect();
                self.validate_records(&records)
            }
            Err(violation) => single_violation(violation),
        }
    }

    fn validate_records(&self, records: &[MessageOptionRecord]) -> ValidationReport {
        if let Err(violation) = rules::validate_not_empty(records, &self.config) {
            return single_violation(violation);
        }

        let mut report = ValidationReport::new();
        for rule in rules::RECORD_RULES {
            if let Err(violation) = rule(records) {
                report.record(violation);
            }
        }
        report
    }
}

fn single_violation(violation: RuleViolation) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.record(violation);
    report
}

// Note: Unit tests for DefaultOptionsValidator are located in
// src/publication/tests/validation_tests.rs.
