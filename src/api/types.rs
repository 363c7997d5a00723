//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client. Form
//! bodies for submissions are the intake forms themselves
//! ([`CitizenForm`](crate::core::services::CitizenForm) and friends).

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{Citizen, Petition, Report};
use crate::pages::Page;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for selecting a page
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    /// Page label (unknown labels select the dashboard)
    pub page: String,
}

/// Request body for classifying a report without submitting it
#[derive(Debug, Deserialize)]
pub struct ClassifyReportRequest {
    /// Report type label
    #[serde(rename = "type", alias = "report_type")]
    pub report_type: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Location
    #[serde(default)]
    pub location: String,
}

/// Request body for classifying a petition without submitting it
#[derive(Debug, Deserialize)]
pub struct ClassifyPetitionRequest {
    /// Category label
    pub category: String,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Always "ok"
    pub status: &'static str,
    /// Service version
    pub version: &'static str,
    /// Active classifier implementation
    pub classifier: &'static str,
}

/// Entity counts for a session
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionCounts {
    /// Registered citizens
    pub citizens: usize,
    /// Petitions
    pub petitions: usize,
    /// Reports
    pub reports: usize,
    /// Notifications
    pub notifications: usize,
}

/// Session endpoint response data
#[derive(Debug, Serialize)]
pub struct SessionData {
    /// Session id (echo of the `X-Session-Id` header)
    pub session_id: String,
    /// When the session started (RFC3339)
    pub created_at: String,
    /// Page the session is on
    pub current_page: Page,
    /// Current identity
    pub citizen: Option<Citizen>,
    /// Entity counts
    pub counts: SessionCounts,
    /// Whether the petition wizard holds a draft
    pub has_draft: bool,
}

/// Petition listing response data
#[derive(Debug, Serialize)]
pub struct PetitionsData {
    /// Petitions, oldest first
    pub petitions: Vec<Petition>,
}

/// Report listing response data
#[derive(Debug, Serialize)]
pub struct ReportsData {
    /// Reports, oldest first
    pub reports: Vec<Report>,
}

/// Upvote response data
#[derive(Debug, Serialize)]
pub struct VoteData {
    /// Petition id
    pub id: String,
    /// Vote count after the upvote
    pub vote_count: u32,
}
