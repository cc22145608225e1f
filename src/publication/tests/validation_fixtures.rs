//! Shared fixtures and helpers for validation tests.

use crate::publication::{
    domain::MessageOptionRecord, ports::validator::ValidationConfig,
    validation::service::DefaultOptionsValidator,
};
use rstest::fixture;
use serde_json::{Value, json};

#[fixture]
pub fn default_validator() -> DefaultOptionsValidator {
    DefaultOptionsValidator::new()
}

#[fixture]
pub fn strict_validator() -> DefaultOptionsValidator {
    DefaultOptionsValidator::with_config(ValidationConfig::strict())
}

/// A record that satisfies every rule.
#[fixture]
pub fn valid_record() -> MessageOptionRecord {
    MessageOptionRecord::new("orders")
        .with_event_types(["create", "update"])
        .with_serializer("OrderSerializer")
        .with_dispatch_method("sync")
}

/// Raw declaration equivalent to a single valid record.
#[fixture]
pub fn valid_declaration() -> Value {
    json!([{
        "topic": "orders",
        "event_types": ["create"],
        "message": "body",
    }])
}
