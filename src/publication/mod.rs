//! Message option declarations and their validation.
//!
//! A publisher declares, per event source, a list of message option records.
//! This module checks such a declaration before anything is published.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Records, vocabularies and reports ([`domain::MessageOptionRecord`], [`domain::ValidationReport`])
//! - **Ports**: The validator interface ([`ports::validator::OptionsValidator`])
//! - **Validation**: Rule functions and the default validator
//! - **Adapters**: Record sources ([`adapters::json`])
//! - **Services**: The publish-time guard ([`services::PublicationGuard`])
//!
//! # Example
//!
//! ```
//! use pheromone::publication::domain::RuleKey;
//! use pheromone::publication::ports::validator::OptionsValidator;
//! use pheromone::publication::validation::service::DefaultOptionsValidator;
//! use serde_json::json;
//!
//! let validator = DefaultOptionsValidator::new();
//! let report = validator.validate(&json!("not a list"));
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(
//!     report.get(RuleKey::MessageOptions),
//!     Some("Message options should be an array")
//! );
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
