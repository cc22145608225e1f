//! Services built on the publication ports.

pub mod guard;

pub use guard::PublicationGuard;
