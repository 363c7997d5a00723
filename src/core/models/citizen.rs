//! Citizen model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A registered citizen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    /// Session-scoped identifier (`CIT-0001`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact address (presence-checked only)
    pub email: String,
    /// Neighbourhood or town
    pub location: String,
    /// Topics the citizen follows
    #[serde(default)]
    pub interests: BTreeSet<String>,
    /// When registered (RFC3339)
    pub registration_date: String,
}

impl Citizen {
    /// Create a citizen registered now
    #[must_use]
    pub fn new(
        id: String,
        name: String,
        email: String,
        location: String,
        interests: BTreeSet<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            location,
            interests,
            registration_date: chrono::Utc::now().to_rfc3339(),
        }
    }
}
