//! Domain types for message option declarations.
//!
//! Pure data with no infrastructure dependencies: the records a publisher
//! declares, the closed vocabularies they draw from, and the report produced
//! by validating them.

mod record;
mod report;
mod vocabulary;

pub use record::{MessageOptionRecord, is_present};
pub use report::{RuleKey, RuleViolation, ValidationReport};
pub use vocabulary::{DispatchMethod, EventType, UnknownSymbol};
