//! Notification model
//!
//! Notifications are the confirmation messages shown after a successful
//! submission. They accumulate per session.

use serde::{Deserialize, Serialize};

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Something was created
    Success,
    /// Something changed on an existing entity
    Info,
    /// Something was stored, but not as asked
    Warning,
}

/// A notification message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Level
    pub level: NotificationLevel,
    /// Message text
    pub message: String,
    /// When raised (RFC3339)
    pub created_at: String,
}

impl Notification {
    /// Create a notification raised now
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a success notification
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    /// Create an info notification
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    /// Create a warning notification
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }
}
