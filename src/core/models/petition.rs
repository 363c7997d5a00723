//! Petition model
//!
//! A petition is a citizen-created request for institutional action. It is
//! tracked by vote count and status and is never deleted.

use serde::{Deserialize, Deserializer, Serialize};

use super::category::PetitionCategory;
use super::routing::{Categorization, RoutingSource};

/// Petition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetitionStatus {
    /// Collecting votes, no official response yet
    #[default]
    Active,
    /// A public body attached a response
    Responded,
}

impl std::fmt::Display for PetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Responded => write!(f, "responded"),
        }
    }
}

/// How the creator's identity is displayed
///
/// Deserializes through [`FromStr`](std::str::FromStr), so `"Public"` and
/// `" private "` are accepted like in forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Creator shown on public listings
    #[default]
    Public,
    /// Creator visible to organizations only
    Private,
}

impl std::str::FromStr for Privacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(format!("Invalid privacy: {s}. Use: public, private")),
        }
    }
}

impl<'de> Deserialize<'de> for Privacy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Official response attached to a petition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionResponse {
    /// Responding public body
    pub responder: String,
    /// Response text
    pub body: String,
    /// When the response was attached (RFC3339)
    pub responded_at: String,
}

/// A petition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Petition {
    /// Session-scoped identifier (`PET-0001`)
    pub id: String,
    /// Short title
    pub title: String,
    /// Full description of the issue
    pub description: String,
    /// Category
    pub category: PetitionCategory,
    /// Display name of the creator ("Anonymous" in incognito mode)
    pub creator: String,
    /// Current status
    pub status: PetitionStatus,
    /// Number of supporters, starts at 1 (the creator)
    pub vote_count: u32,
    /// Where the issue is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Names of attached evidence files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    /// Identity display setting
    pub privacy: Privacy,
    /// Creator hidden from stored and displayed data
    pub incognito: bool,
    /// Public body the petition was routed to
    pub department: String,
    /// Which classifier produced the department
    pub routing_source: RoutingSource,
    /// Official response, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<PetitionResponse>,
    /// When submitted (RFC3339)
    pub created_at: String,
}

impl Petition {
    /// Create a new active petition with a single vote
    #[must_use]
    pub fn new(
        id: String,
        title: String,
        description: String,
        creator: String,
        categorization: Categorization,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category: categorization.category,
            creator,
            status: PetitionStatus::Active,
            vote_count: 1,
            location: None,
            evidence: Vec::new(),
            privacy: Privacy::Public,
            incognito: false,
            department: categorization.department,
            routing_source: categorization.source,
            response: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Add one vote, returning the new count
    pub const fn upvote(&mut self) -> u32 {
        self.vote_count = self.vote_count.saturating_add(1);
        self.vote_count
    }

    /// Attach an official response and mark the petition responded
    pub fn respond(&mut self, responder: String, body: String) {
        self.response = Some(PetitionResponse {
            responder,
            body,
            responded_at: chrono::Utc::now().to_rfc3339(),
        });
        self.status = PetitionStatus::Responded;
    }
}
