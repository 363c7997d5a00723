//! Core domain logic for mau2
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Petition, Report, Citizen, Routing)
//! - `services/` - Intake, wizard and analytics orchestration
//! - `ports/` - Trait definitions for external dependencies (Classifier)

pub mod models;
pub mod ports;
pub mod services;
