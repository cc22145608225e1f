//! Validator port for message option declarations.
//!
//! Defines the abstract interface for checking a declaration before it is
//! allowed to publish.

use serde_json::Value;

use crate::publication::domain::{MessageOptionRecord, ValidationReport};

/// Port for message option validation.
///
/// Validation runs in two layers:
/// 1. Container shape (the declaration is a list of records)
/// 2. Per-record rules (topic, event types, message source, dispatch method)
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return failures as a [`ValidationReport`], never panic
/// - Stop after a container shape failure, but run every per-record rule
///   otherwise
/// - Be stateless and thread-safe
pub trait OptionsValidator: Send + Sync {
    /// Validates a raw declaration, including its container shape.
    ///
    /// An empty report means the declaration may be published.
    fn validate(&self, options: &Value) -> ValidationReport;

    /// Validates records that are already known to form a list.
    fn validate_records(&self, records: &[MessageOptionRecord]) -> ValidationReport;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use pheromone::publication::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.allow_empty_options);
///
/// let strict = ValidationConfig::strict();
/// assert!(!strict.allow_empty_options);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Whether an empty list of records is accepted.
    pub allow_empty_options: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_empty_options: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that rejects empty declarations.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_empty_options: false,
        }
    }
}
