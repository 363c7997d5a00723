//! Report model
//!
//! A report is an incident submitted by a citizen, optionally anonymous.
//! Its routing is assigned once at creation and never changes.

use serde::{Deserialize, Serialize};

use super::category::ReportType;
use super::routing::Routing;

/// Reporter name stored for anonymous submissions
pub const ANONYMOUS: &str = "Anonymous";

/// Report status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Received and routed
    #[default]
    Submitted,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// An incident report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Session-scoped identifier (`RPT-0001`)
    pub id: String,
    /// Kind of incident
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// What happened
    pub description: String,
    /// Where it happened
    pub location: String,
    /// Reporter name, or [`ANONYMOUS`]
    pub reporter: String,
    /// Reporter identity suppressed
    pub is_incognito: bool,
    /// Current status
    pub status: ReportStatus,
    /// Handling department and urgency
    pub routing: Routing,
    /// When submitted (RFC3339)
    pub created_at: String,
}

impl Report {
    /// Create a submitted report
    ///
    /// When `incognito` is set the reporter name is replaced by [`ANONYMOUS`]
    /// regardless of what was passed in.
    #[must_use]
    pub fn new(
        id: String,
        report_type: ReportType,
        description: String,
        location: String,
        reporter: Option<String>,
        incognito: bool,
        routing: Routing,
    ) -> Self {
        let reporter = match reporter {
            Some(name) if !incognito => name,
            _ => ANONYMOUS.to_string(),
        };
        Self {
            id,
            report_type,
            description,
            location,
            reporter,
            is_incognito: incognito,
            status: ReportStatus::Submitted,
            routing,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
