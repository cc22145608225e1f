//! JSON record source.
//!
//! Declarations often arrive as configuration text. These helpers only parse
//! the text; deciding whether the parsed value is a usable declaration is
//! left to the validator.

use serde_json::Value;
use std::io::Read;

use crate::publication::error::DeclarationError;

/// Parses declaration text into a raw value.
///
/// # Errors
///
/// Returns `DeclarationError::MalformedJson` if `raw` is not valid JSON.
///
/// # Examples
///
/// ```
/// use pheromone::publication::adapters::json::parse_declaration;
///
/// let value = parse_declaration(r#"[{"topic": "orders", "message": "body"}]"#)
///     .expect("valid JSON");
/// assert!(value.is_array());
/// assert!(parse_declaration("[{").is_err());
/// ```
pub fn parse_declaration(raw: &str) -> Result<Value, DeclarationError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads and parses declaration text from `reader`.
///
/// # Errors
///
/// Returns `DeclarationError::Io` if reading fails, or
/// `DeclarationError::MalformedJson` if the content is not valid JSON.
pub fn read_declaration(reader: impl Read) -> Result<Value, DeclarationError> {
    Ok(serde_json::from_reader(reader)?)
}
