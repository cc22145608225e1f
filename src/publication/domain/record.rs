//! Message option records describing how an event maps to a publish action.
//!
//! A record keeps the raw symbols it was declared with. Validation decides
//! whether those symbols belong to the accepted vocabularies; the typed
//! accessors on the record only report what it would do once accepted.

use serde_json::Value;

use super::vocabulary::{DispatchMethod, EventType};

/// One declared publication rule.
///
/// # Examples
///
/// ```
/// use pheromone::publication::domain::{DispatchMethod, EventType, MessageOptionRecord};
///
/// let record = MessageOptionRecord::new("orders")
///     .with_event_types(["create"])
///     .with_message("body")
///     .with_dispatch_method("async");
///
/// assert!(record.triggers_on(EventType::Create));
/// assert!(!record.triggers_on(EventType::Update));
/// assert_eq!(record.dispatch_method(), Some(DispatchMethod::Async));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptionRecord {
    /// Destination queue or exchange.
    pub topic: Option<String>,
    /// Event lifecycle symbols that trigger publication.
    pub event_types: Option<Vec<String>>,
    /// Name of the producer that renders the message body.
    pub serializer: Option<String>,
    /// Literal message body.
    pub message: Option<Value>,
    /// Dispatch symbol; absence selects the default method.
    pub dispatch_method: Option<String>,
}

impl MessageOptionRecord {
    /// Creates a record publishing to `topic` with no other options set.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    /// Restricts publication to the given event type symbols.
    #[must_use]
    pub fn with_event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_types = Some(event_types.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the serializer used to render the message body.
    #[must_use]
    pub fn with_serializer(mut self, serializer: impl Into<String>) -> Self {
        self.serializer = Some(serializer.into());
        self
    }

    /// Sets a literal message body.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Value>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the dispatch method symbol.
    #[must_use]
    pub fn with_dispatch_method(mut self, dispatch_method: impl Into<String>) -> Self {
        self.dispatch_method = Some(dispatch_method.into());
        self
    }

    /// Builds a record from one element of a raw declaration.
    ///
    /// Conversion never fails. Elements that are not objects yield a record
    /// with every field absent, and a non-sequence `event_types` is kept as
    /// an empty list so it cannot pass validation.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            topic: present_text(value.get("topic")),
            event_types: event_symbols(value.get("event_types")),
            serializer: present_text(value.get("serializer")),
            message: value.get("message").filter(|message| !message.is_null()).cloned(),
            dispatch_method: value
                .get("dispatch_method")
                .filter(|method| !method.is_null())
                .map(symbol_text),
        }
    }

    /// Builds records from a raw declaration, or `None` if it is not an array.
    #[must_use]
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        value
            .as_array()
            .map(|items| items.iter().map(Self::from_value).collect())
    }

    /// Returns `true` if the topic is present and not blank.
    #[must_use]
    pub fn has_topic(&self) -> bool {
        self.topic
            .as_deref()
            .is_some_and(|topic| !topic.trim().is_empty())
    }

    /// Returns `true` if event types are absent, or a non-empty list of
    /// accepted symbols.
    #[must_use]
    pub fn has_valid_event_types(&self) -> bool {
        self.event_types.as_deref().is_none_or(|symbols| {
            !symbols.is_empty() && symbols.iter().all(|symbol| EventType::parse(symbol).is_some())
        })
    }

    /// Returns `true` if a serializer or a message body is present.
    #[must_use]
    pub fn has_message_source(&self) -> bool {
        let has_serializer = self
            .serializer
            .as_deref()
            .is_some_and(|serializer| !serializer.trim().is_empty());
        has_serializer || self.message.as_ref().is_some_and(is_present)
    }

    /// Returns `true` if the dispatch method is absent or allowed.
    #[must_use]
    pub fn has_valid_dispatch_method(&self) -> bool {
        self.dispatch_method
            .as_deref()
            .is_none_or(|method| DispatchMethod::parse(method).is_some())
    }

    /// Returns `true` if an event of this type should be published.
    ///
    /// Records without event types publish on every accepted type.
    #[must_use]
    pub fn triggers_on(&self, event_type: EventType) -> bool {
        self.event_types.as_deref().is_none_or(|symbols| {
            symbols.iter().any(|symbol| symbol == event_type.as_str())
        })
    }

    /// Returns the effective dispatch method, or `None` if the declared
    /// symbol is not allowed.
    #[must_use]
    pub fn dispatch_method(&self) -> Option<DispatchMethod> {
        match self.dispatch_method.as_deref() {
            None => Some(DispatchMethod::default()),
            Some(method) => DispatchMethod::parse(method),
        }
    }
}

/// Returns `true` unless the value is blank.
///
/// `null`, `false`, whitespace-only strings, empty arrays and empty objects
/// are blank.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Bool(true) | Value::Number(_) => true,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        other if is_present(other) => Some(other.to_string()),
        _ => None,
    }
}

fn event_symbols(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Array(items) => Some(items.iter().map(symbol_text).collect()),
        _ => Some(Vec::new()),
    }
}

fn symbol_text(value: &Value) -> String {
    match value {
        Value::String(symbol) => symbol.clone(),
        other => other.to_string(),
    }
}
