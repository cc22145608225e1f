//! Port trait definitions for the publication subsystem.
//!
//! Ports define the abstract interfaces the guard relies on. The default
//! validator lives in [`crate::publication::validation`].

pub mod validator;

pub use validator::{OptionsValidator, ValidationConfig};
