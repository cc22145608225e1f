//! Pheromone: validation of domain event publication declarations.
//!
//! An application declares how its domain events are published to a message
//! broker as a list of message option records. This crate checks those
//! declarations and reports, per rule, what is wrong with them. It does not
//! build messages or talk to a broker.
//!
//! # Modules
//!
//! - [`publication`]: Message option records, validation rules and the
//!   publish-time guard

pub mod publication;
