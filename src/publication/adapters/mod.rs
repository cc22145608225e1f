//! Adapters that feed declarations into the validator.

pub mod json;
