//! Unit tests for the publication module.
//!
//! Tests are organised by concept, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod validation_fixtures;
mod validation_tests;
