//! Validation report keyed by rule class.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use thiserror::Error;

/// Rule class a report entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    /// The declaration is not a list of records.
    MessageOptions,
    /// A record has no topic.
    Topic,
    /// A record declares an unusable set of event types.
    EventTypes,
    /// A record has neither a serializer nor a message body.
    MessageAttributes,
    /// A record declares an unknown dispatch method.
    DispatchMethod,
}

impl RuleKey {
    /// Returns the report key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageOptions => "message_options",
            Self::Topic => "topic",
            Self::EventTypes => "event_types",
            Self::MessageAttributes => "message_attributes",
            Self::DispatchMethod => "dispatch_method",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken rule. The display text is the message stored in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The declaration is not an array.
    #[error("Message options should be an array")]
    MalformedOptions,

    /// The declaration is an empty array and the configuration forbids it.
    #[error("Message options should not be empty")]
    EmptyOptions,

    /// At least one record has a missing or blank topic.
    #[error("Topic name missing")]
    MissingTopic,

    /// At least one record has empty or unknown event types.
    #[error("Event types must be a non-empty array with types create,update")]
    InvalidEventTypes,

    /// At least one record has neither serializer nor message.
    #[error("Either serializer or message should be specified")]
    MissingMessageSource,

    /// At least one record has a dispatch method other than sync or async.
    #[error("Invalid dispatch method")]
    InvalidDispatchMethod,
}

impl RuleViolation {
    /// Returns the report key this violation is recorded under.
    #[must_use]
    pub const fn rule(self) -> RuleKey {
        match self {
            Self::MalformedOptions | Self::EmptyOptions => RuleKey::MessageOptions,
            Self::MissingTopic => RuleKey::Topic,
            Self::InvalidEventTypes => RuleKey::EventTypes,
            Self::MissingMessageSource => RuleKey::MessageAttributes,
            Self::InvalidDispatchMethod => RuleKey::DispatchMethod,
        }
    }
}

/// Messages keyed by the rule that failed. Empty means the declaration may
/// be published.
///
/// Each key holds one message. Recording a key a second time replaces its
/// message and keeps its position.
///
/// # Examples
///
/// ```
/// use pheromone::publication::domain::{RuleKey, RuleViolation, ValidationReport};
///
/// let mut report = ValidationReport::new();
/// report.record(RuleViolation::MissingTopic);
///
/// assert_eq!(report.get(RuleKey::Topic), Some("Topic name missing"));
/// assert_eq!(report.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(RuleKey, String)>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a violation under its rule key.
    pub fn record(&mut self, violation: RuleViolation) {
        self.insert(violation.rule(), violation.to_string());
    }

    /// Stores `message` under `rule`, replacing any earlier message.
    pub fn insert(&mut self, rule: RuleKey, message: impl Into<String>) {
        let text = message.into();
        match self.entries.iter_mut().find(|(key, _)| *key == rule) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((rule, text)),
        }
    }

    /// Returns `true` when no rule failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failed rule classes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the message recorded for `rule`.
    #[must_use]
    pub fn get(&self, rule: RuleKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == rule)
            .map(|(_, message)| message.as_str())
    }

    /// Returns `true` if `rule` failed.
    #[must_use]
    pub fn contains(&self, rule: RuleKey) -> bool {
        self.get(rule).is_some()
    }

    /// Failed rule keys in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = RuleKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, message)| (*key, message.as_str()))
    }

    /// Converts the report into `Ok(())` when empty, or `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the report itself when any rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (rule, message)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{rule}: {message}")?;
        }
        Ok(())
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (rule, message) in self.iter() {
            map.serialize_entry(rule.as_str(), message)?;
        }
        map.end()
    }
}
