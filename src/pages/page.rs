//! Page labels and wizard navigation

use serde::{Deserialize, Serialize};

/// A page of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Welcome screen with feature overview
    Landing,
    /// "Know your rights" introduction
    Onboarding,
    /// Civic feed with profile and quick actions
    Dashboard,
    /// Citizen registration form
    Register,
    /// Petition wizard, step 1: title, category, description
    CreatePetition,
    /// Petition wizard, step 2: evidence and location
    PetitionEvidence,
    /// Petition wizard, step 3: privacy, summary, submit
    PetitionReview,
    /// Incident report form
    ReportIncident,
    /// Petition listing
    Petitions,
    /// Report listing
    Reports,
    /// Aggregate counters
    Analytics,
    /// Entities created in this session
    MyActivity,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Self; 12] = [
        Self::Landing,
        Self::Onboarding,
        Self::Dashboard,
        Self::Register,
        Self::CreatePetition,
        Self::PetitionEvidence,
        Self::PetitionReview,
        Self::ReportIncident,
        Self::Petitions,
        Self::Reports,
        Self::Analytics,
        Self::MyActivity,
    ];

    /// Page label as used in URLs and session state
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Onboarding => "onboarding",
            Self::Dashboard => "dashboard",
            Self::Register => "register",
            Self::CreatePetition => "create_petition",
            Self::PetitionEvidence => "petition_evidence",
            Self::PetitionReview => "petition_review",
            Self::ReportIncident => "report_incident",
            Self::Petitions => "petitions",
            Self::Reports => "reports",
            Self::Analytics => "analytics",
            Self::MyActivity => "my_activity",
        }
    }

    /// Resolve a label; unknown labels land on the dashboard
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.label() == wanted)
            .unwrap_or(Self::Dashboard)
    }

    /// Page reached by the "Next" control, if the page has one
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Landing => Some(Self::Onboarding),
            Self::Onboarding => Some(Self::Dashboard),
            Self::CreatePetition => Some(Self::PetitionEvidence),
            Self::PetitionEvidence => Some(Self::PetitionReview),
            _ => None,
        }
    }

    /// Page reached by the "Back" control, if the page has one
    #[must_use]
    pub const fn back(self) -> Option<Self> {
        match self {
            Self::CreatePetition
            | Self::Register
            | Self::ReportIncident
            | Self::Petitions
            | Self::Reports
            | Self::Analytics
            | Self::MyActivity => Some(Self::Dashboard),
            Self::PetitionEvidence => Some(Self::CreatePetition),
            Self::PetitionReview => Some(Self::PetitionEvidence),
            Self::Onboarding => Some(Self::Landing),
            Self::Landing | Self::Dashboard => None,
        }
    }

    /// Step number within the petition wizard (1-based)
    #[must_use]
    pub const fn wizard_step(self) -> Option<u8> {
        match self {
            Self::CreatePetition => Some(1),
            Self::PetitionEvidence => Some(2),
            Self::PetitionReview => Some(3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
