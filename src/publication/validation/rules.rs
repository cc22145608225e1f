//! Individual validation rule implementations.
//!
//! Each rule is a pure function over the whole record set. A rule reports at
//! most one violation no matter how many records break it.

use serde_json::Value;

use crate::publication::{
    domain::{MessageOptionRecord, RuleViolation},
    ports::validator::ValidationConfig,
};

/// Signature shared by the per-record rules.
pub type RecordRule = fn(&[MessageOptionRecord]) -> Result<(), RuleViolation>;

/// Per-record rules in the order they are applied.
pub const RECORD_RULES: [RecordRule; 4] = [
    validate_topic,
    validate_event_types,
    validate_message_attributes,
    validate_dispatch_method,
];

/// Validates that the declaration is a list and returns its elements.
///
/// # Errors
///
/// Returns `RuleViolation::MalformedOptions` for any value that is not an
/// array, including a single record object and `null`.
pub fn validate_container(options: &Value) -> Result<&[Value], RuleViolation> {
    options
        .as_array()
        .map(Vec::as_slice)
        .ok_or(RuleViolation::MalformedOptions)
}

/// Validates that the declaration lists at least one record, when the
/// configuration requires it.
///
/// # Errors
///
/// Returns `RuleViolation::EmptyOptions` if `records` is empty and
/// `config.allow_empty_options` is `false`.
pub const fn validate_not_empty(
    records: &[MessageOptionRecord],
    config: &ValidationConfig,
) -> Result<(), RuleViolation> {
    if records.is_empty() && !config.allow_empty_options {
        return Err(RuleViolation::EmptyOptions);
    }
    Ok(())
}

/// Validates that every record names a topic.
///
/// # Errors
///
/// Returns `RuleViolation::MissingTopic` if any topic is absent or blank.
pub fn validate_topic(records: &[MessageOptionRecord]) -> Result<(), RuleViolation> {
    if records.iter().all(MessageOptionRecord::has_topic) {
        Ok(())
    } else {
        Err(RuleViolation::MissingTopic)
    }
}

/// Validates declared event types.
///
/// Absent event types are accepted.
///
/// # Errors
///
/// Returns `RuleViolation::InvalidEventTypes` if any record declares an empty
/// list or a symbol other than `create` or `update`.
pub fn validate_event_types(records: &[MessageOptionRecord]) -> Result<(), RuleViolation> {
    if records
        .iter()
        .all(MessageOptionRecord::has_valid_event_types)
    {
        Ok(())
    } else {
        Err(RuleViolation::InvalidEventTypes)
    }
}

/// Validates that every record can produce a message body.
///
/// # Errors
///
/// Returns `RuleViolation::MissingMessageSource` if any record has neither a
/// serializer nor a message.
pub fn validate_message_attributes(records: &[MessageOptionRecord]) -> Result<(), RuleViolation> {
    if records.iter().all(MessageOptionRecord::has_message_source) {
        Ok(())
    } else {
        Err(RuleViolation::MissingMessageSource)
    }
}

/// Validates declared dispatch methods.
///
/// # Errors
///
/// Returns `RuleViolation::InvalidDispatchMethod` if any record declares a
/// method other than `sync` or `async`.
pub fn validate_dispatch_method(records: &[MessageOptionRecord]) -> Result<(), RuleViolation> {
    if records
        .iter()
        .all(MessageOptionRecord::has_valid_dispatch_method)
    {
        Ok(())
    } else {
        Err(RuleViolation::InvalidDispatchMethod)
    }
}
