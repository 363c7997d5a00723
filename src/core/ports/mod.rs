//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (language-model services, lookup tables).
//!
//! Implementations live in the `adapters` module.

mod classifier;

pub use classifier::Classifier;
