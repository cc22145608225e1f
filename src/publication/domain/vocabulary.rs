//! Closed vocabularies used by message option records.
//!
//! Records carry raw symbols so that out-of-vocabulary values can be
//! represented and reported. The enums in this module are the typed view of
//! the accepted symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a symbol is outside a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} symbol '{symbol}'")]
pub struct UnknownSymbol {
    /// Name of the vocabulary that rejected the symbol.
    pub vocabulary: &'static str,
    /// The rejected symbol.
    pub symbol: String,
}

/// Event lifecycle type that can trigger a publication.
///
/// # Examples
///
/// ```
/// use pheromone::publication::domain::EventType;
///
/// assert_eq!(EventType::parse("create"), Some(EventType::Create));
/// assert_eq!(EventType::parse("delete"), None);
/// assert_eq!(EventType::Update.to_string(), "update");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A record was created.
    Create,
    /// A record was updated.
    Update,
}

impl EventType {
    /// Every accepted event type, in declaration order.
    pub const ACCEPTED: [Self; 2] = [Self::Create, Self::Update];

    /// Returns the symbol for this event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }

    /// Parses a symbol, returning `None` when it is not accepted.
    #[must_use]
    pub fn parse(symbol: &str) -> Option<Self> {
        Self::ACCEPTED
            .into_iter()
            .find(|event_type| event_type.as_str() == symbol)
    }

    /// Comma-separated list of accepted symbols.
    #[must_use]
    pub fn accepted_symbols() -> String {
        Self::ACCEPTED
            .iter()
            .map(|event_type| event_type.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSymbol {
            vocabulary: "event type",
            symbol: s.to_owned(),
        })
    }
}

/// How the publish call is issued relative to the caller.
///
/// Records that omit a dispatch method use [`DispatchMethod::default`],
/// which is synchronous dispatch.
///
/// # Examples
///
/// ```
/// use pheromone::publication::domain::DispatchMethod;
///
/// assert_eq!("async".parse::<DispatchMethod>(), Ok(DispatchMethod::Async));
/// assert!("later".parse::<DispatchMethod>().is_err());
/// assert_eq!(DispatchMethod::default(), DispatchMethod::Sync);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMethod {
    /// Publish inline, before returning to the caller.
    #[default]
    Sync,
    /// Hand the publish call off to a background job.
    Async,
}

impl DispatchMethod {
    /// Every allowed dispatch method.
    pub const ALLOWED: [Self; 2] = [Self::Sync, Self::Async];

    /// Returns the symbol for this dispatch method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }

    /// Parses a symbol, returning `None` when it is not allowed.
    #[must_use]
    pub fn parse(symbol: &str) -> Option<Self> {
        Self::ALLOWED
            .into_iter()
            .find(|method| method.as_str() == symbol)
    }
}

impl fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchMethod {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSymbol {
            vocabulary: "dispatch method",
            symbol: s.to_owned(),
        })
    }
}
