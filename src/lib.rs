//! mau2 - Civic engagement backend
//!
//! Citizens register, submit petitions through a three-step wizard, upvote
//! them and report local incidents. Every submission is routed to a public
//! body by a pluggable classifier: a static table, or a language model that
//! falls back to the table when it cannot answer. All state lives in
//! per-session stores owned by the HTTP request loop.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod pages;
pub mod paths;
#[cfg(feature = "server")]
pub mod server;
pub mod session;
