//! Classifier output
//!
//! A [`Routing`] is attached to each report and a [`Categorization`] to each
//! petition. Both record where the answer came from so that fallbacks stay
//! visible to the dashboard.

use serde::{Deserialize, Serialize};

use super::category::PetitionCategory;

/// Confidence string attached to every static-table answer
pub const RULE_BASED_CONFIDENCE: &str = "rule-based";

/// Confidence string attached to every language-model answer
pub const MODEL_CONFIDENCE: &str = "model";

/// How pressing a report is for the handling department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Can wait for scheduled maintenance
    Low,
    /// Should be handled this week
    #[default]
    Medium,
    /// Hazard to people or property
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid urgency: {s}. Use: low, medium, high")),
        }
    }
}

/// Which implementation produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingSource {
    /// Static table selected by configuration
    Static,
    /// Language-model answer
    Remote,
    /// Static table used after the remote call failed
    Fallback,
}

impl std::fmt::Display for RoutingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Routing label assigned to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routing {
    /// Department that handles the report
    pub department: String,
    /// Urgency estimate
    pub urgency: Urgency,
    /// Where the answer came from
    pub source: RoutingSource,
    /// Constant confidence marker for the source
    pub confidence: String,
}

impl Routing {
    /// Mark a static answer as a fallback for a failed remote call
    #[must_use]
    pub fn into_fallback(mut self) -> Self {
        self.source = RoutingSource::Fallback;
        self
    }
}

/// Category and responsible body assigned to a petition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorization {
    /// Petition category (user-selected, possibly corrected by the model)
    pub category: PetitionCategory,
    /// Public body the petition is addressed to
    pub department: String,
    /// Where the answer came from
    pub source: RoutingSource,
    /// Constant confidence marker for the source
    pub confidence: String,
}

impl Categorization {
    /// Mark a static answer as a fallback for a failed remote call
    #[must_use]
    pub fn into_fallback(mut self) -> Self {
        self.source = RoutingSource::Fallback;
        self
    }
}
