//! Common test utilities
//!
//! - `fixtures.rs` - Form and session builders
//! - `mocks.rs` - Completion backends with scripted behavior

pub mod fixtures;
