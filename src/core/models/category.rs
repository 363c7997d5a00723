//! Enumerated intake fields
//!
//! Petition categories and report types are the only enumerated inputs the
//! intake forms accept. Both parse leniently (case, `_`, `-` and spaces are
//! ignored) so that form labels like `"Public Safety"` and API values like
//! `"public_safety"` resolve to the same variant.

use serde::{Deserialize, Serialize};

/// Label a form shows before the user picks a category
pub const CATEGORY_PLACEHOLDER: &str = "Select a category";

/// Normalize a label for lenient matching
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Petition category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetitionCategory {
    /// Roads, transit, traffic
    Transportation,
    /// Parks, pollution, green spaces
    Environment,
    /// Public buildings and utilities
    Infrastructure,
    /// Policing, emergency services
    PublicSafety,
    /// Schools
    Education,
    /// Clinics, public health
    Healthcare,
}

impl PetitionCategory {
    /// All categories, in form order
    pub const ALL: [Self; 6] = [
        Self::Transportation,
        Self::Environment,
        Self::Infrastructure,
        Self::PublicSafety,
        Self::Education,
        Self::Healthcare,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Environment => "Environment",
            Self::Infrastructure => "Infrastructure",
            Self::PublicSafety => "Public Safety",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
        }
    }
}

impl std::fmt::Display for PetitionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PetitionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize(c.label()) == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid category: {s}. Use one of: {}",
                    Self::ALL.map(Self::label).join(", ")
                )
            })
    }
}

/// Incident report type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Road surface damage
    Pothole,
    /// Broken or missing street light
    Streetlight,
    /// Waste dumped outside designated sites
    IllegalDumping,
    /// Vandalism on public or private property
    Graffiti,
    /// Burst main, flooding, leaking hydrant
    WaterLeak,
    /// Noise complaint
    Noise,
    /// Faulty traffic light or sign
    TrafficSignal,
    /// Anything else
    Other,
}

impl ReportType {
    /// All report types, in form order
    pub const ALL: [Self; 8] = [
        Self::Pothole,
        Self::Streetlight,
        Self::IllegalDumping,
        Self::Graffiti,
        Self::WaterLeak,
        Self::Noise,
        Self::TrafficSignal,
        Self::Other,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::Streetlight => "Streetlight",
            Self::IllegalDumping => "Illegal Dumping",
            Self::Graffiti => "Graffiti",
            Self::WaterLeak => "Water Leak",
            Self::Noise => "Noise",
            Self::TrafficSignal => "Traffic Signal",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|t| normalize(t.label()) == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid report type: {s}. Use one of: {}",
                    Self::ALL.map(Self::label).join(", ")
                )
            })
    }
}
