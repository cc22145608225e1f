//! Unit tests for the validation service.

use super::validation_fixtures::{
    default_validator, strict_validator, valid_declaration, valid_record,
};
use crate::publication::{
    domain::{EventType, MessageOptionRecord, RuleKey, RuleViolation},
    ports::validator::OptionsValidator,
    validation::service::DefaultOptionsValidator,
};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Container shape
// ============================================================================

#[rstest]
#[case(json!("not a list"))]
#[case(json!(null))]
#[case(json!(7))]
#[case(json!({"topic": "orders", "message": "body"}))]
#[case(json!({"topic": "orders", "dispatch_method": "later"}))]
fn non_array_declarations_report_only_message_options(
    default_validator: DefaultOptionsValidator,
    #[case] options: Value,
) {
    let report = default_validator.validate(&options);

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(RuleKey::MessageOptions),
        Some("Message options should be an array")
    );
}

#[rstest]
fn array_declarations_never_report_message_options(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([{}, 3, "x", null]));

    assert!(!report.contains(RuleKey::MessageOptions));
    assert!(report.contains(RuleKey::Topic));
    assert!(report.contains(RuleKey::MessageAttributes));
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[rstest]
fn valid_declaration_produces_empty_report(
    default_validator: DefaultOptionsValidator,
    valid_declaration: Value,
) {
    assert!(default_validator.validate(&valid_declaration).is_empty());
}

#[rstest]
fn missing_topic_is_reported(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"event_types": ["create"], "message": "body"}
    ]));

    assert_eq!(report.len(), 1);
    assert_eq!(report.get(RuleKey::Topic), Some("Topic name missing"));
}

#[rstest]
fn unknown_event_type_is_reported(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"topic": "orders", "event_types": ["delete"], "message": "body"}
    ]));

    assert_eq!(report.rules().collect::<Vec<_>>(), vec![RuleKey::EventTypes]);
}

#[rstest]
fn unknown_dispatch_method_is_reported(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"topic": "o", "message": "m", "dispatch_method": "later"}
    ]));

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(RuleKey::DispatchMethod),
        Some("Invalid dispatch method")
    );
}

// ============================================================================
// Rule independence and aggregation
// ============================================================================

#[rstest]
fn every_record_rule_runs_after_a_failure(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"event_types": [], "dispatch_method": "eventually"}
    ]));

    assert_eq!(
        report.rules().collect::<Vec<_>>(),
        vec![
            RuleKey::Topic,
            RuleKey::EventTypes,
            RuleKey::MessageAttributes,
            RuleKey::DispatchMethod,
        ]
    );
}

#[rstest]
fn failures_in_several_records_share_one_entry(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"message": "first"},
        {"topic": "  ", "message": "second"},
        {"topic": "orders", "message": "third"},
    ]));

    assert_eq!(report.len(), 1);
    assert_eq!(report.get(RuleKey::Topic), Some("Topic name missing"));
}

#[rstest]
fn event_types_message_lists_accepted_types(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"topic": "orders", "event_types": [], "message": "body"}
    ]));

    let expected = format!(
        "Event types must be a non-empty array with types {}",
        EventType::accepted_symbols()
    );
    assert_eq!(report.get(RuleKey::EventTypes), Some(expected.as_str()));
}

#[rstest]
#[case(json!("create"))]
#[case(json!({"create": true}))]
#[case(json!([1]))]
fn non_sequence_event_types_are_rejected(
    default_validator: DefaultOptionsValidator,
    #[case] event_types: Value,
) {
    let report = default_validator.validate(&json!([
        {"topic": "orders", "event_types": event_types, "message": "body"}
    ]));

    assert!(report.contains(RuleKey::EventTypes));
}

#[rstest]
#[case(json!(null))]
#[case(json!(false))]
fn null_or_false_event_types_count_as_absent(
    default_validator: DefaultOptionsValidator,
    #[case] event_types: Value,
) {
    let report = default_validator.validate(&json!([
        {"topic": "orders", "event_types": event_types, "message": "body"}
    ]));

    assert!(report.is_empty());
}

#[rstest]
fn null_dispatch_method_uses_default(default_validator: DefaultOptionsValidator) {
    let report = default_validator.validate(&json!([
        {"topic": "orders", "message": "body", "dispatch_method": null}
    ]));

    assert!(report.is_empty());
}

// ============================================================================
// Empty declarations
// ============================================================================

#[rstest]
fn empty_declaration_passes_by_default(default_validator: DefaultOptionsValidator) {
    assert!(default_validator.validate(&json!([])).is_empty());
}

#[rstest]
fn empty_declaration_fails_under_strict_config(strict_validator: DefaultOptionsValidator) {
    let report = strict_validator.validate(&json!([]));

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get(RuleKey::MessageOptions),
        Some(RuleViolation::EmptyOptions.to_string().as_str())
    );
}

#[rstest]
fn strict_config_accepts_non_empty_declarations(
    strict_validator: DefaultOptionsValidator,
    valid_declaration: Value,
) {
    assert!(strict_validator.validate(&valid_declaration).is_empty());
}

// ============================================================================
// Typed records
// ============================================================================

#[rstest]
fn validate_records_accepts_valid_records(
    default_validator: DefaultOptionsValidator,
    valid_record: MessageOptionRecord,
) {
    let records = vec![valid_record.clone(), valid_record.with_dispatch_method("async")];
    assert!(default_validator.validate_records(&records).is_empty());
}

#[rstest]
fn validate_records_matches_raw_validation(default_validator: DefaultOptionsValidator) {
    let raw = json!([{"topic": "orders", "dispatch_method": "later"}]);
    let records = MessageOptionRecord::list_from_value(&raw).expect("raw declaration is an array");

    assert_eq!(
        default_validator.validate_records(&records),
        default_validator.validate(&raw)
    );
}

#[rstest]
fn validation_is_repeatable(default_validator: DefaultOptionsValidator) {
    let raw = json!([{"event_types": ["delete"]}]);
    assert_eq!(default_validator.validate(&raw), default_validator.validate(&raw));
}
