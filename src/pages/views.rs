//! Page view data
//!
//! Each page renders to plain data; presentation is left to the client.

use serde::Serialize;

use crate::adapters::static_table;
use crate::core::models::{
    Citizen, Notification, Petition, PetitionCategory, PetitionStatus, Report, ReportType,
    Urgency,
};
use crate::core::services::intake::{EVIDENCE_EXTENSIONS, GUEST};
use crate::core::services::{AnalyticsSnapshot, PetitionSummary};
use crate::session::{Evidence, PetitionDraft};

use super::Page;

/// A form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Request field name
    pub name: &'static str,
    /// Human label
    pub label: &'static str,
    /// Must be non-empty on submit
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, required: bool) -> FormField {
    FormField {
        name,
        label,
        required,
    }
}

/// Landing page feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card title
    pub title: &'static str,
    /// One-line description
    pub summary: &'static str,
}

/// Dashboard profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Role label
    pub role: &'static str,
    /// Petitions created in this session
    pub petitions: usize,
    /// Reports submitted in this session
    pub reports: usize,
    /// Petitions with an official response
    pub resolved: usize,
}

/// A report type with its default routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTypeOption {
    /// Type value
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Human label
    pub label: &'static str,
    /// Department the static table routes to
    pub department: &'static str,
    /// Default urgency
    pub urgency: Urgency,
}

/// Page-specific content
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageView {
    /// Landing page
    Landing {
        /// Headline
        headline: &'static str,
        /// Sub-headline
        tagline: &'static str,
        /// Feature cards
        features: Vec<Feature>,
    },
    /// Onboarding page
    Onboarding {
        /// Heading
        heading: &'static str,
        /// Body text
        body: &'static str,
    },
    /// Dashboard
    Dashboard {
        /// Profile card
        profile: Profile,
        /// Quick action targets
        quick_actions: Vec<Page>,
        /// Newest petitions first
        petitions: Vec<Petition>,
        /// Newest reports first
        reports: Vec<Report>,
        /// Newest notifications first
        notifications: Vec<Notification>,
    },
    /// Citizen registration
    Register {
        /// Form inputs
        fields: Vec<FormField>,
        /// Current identity, if registered
        citizen: Option<Citizen>,
    },
    /// Petition wizard step 1
    CreatePetition {
        /// Form inputs
        fields: Vec<FormField>,
        /// Category choices
        categories: Vec<PetitionCategory>,
        /// Previously saved draft, for prefill
        draft: Option<PetitionDraft>,
    },
    /// Petition wizard step 2
    PetitionEvidence {
        /// Form inputs
        fields: Vec<FormField>,
        /// Accepted file extensions
        accepted_extensions: Vec<&'static str>,
        /// Evidence recorded so far
        evidence: Evidence,
        /// Whether step 1 has been completed
        has_draft: bool,
    },
    /// Petition wizard step 3
    PetitionReview {
        /// Summary of what would be submitted
        summary: PetitionSummary,
    },
    /// Incident report form
    ReportIncident {
        /// Form inputs
        fields: Vec<FormField>,
        /// Report type choices
        report_types: Vec<ReportTypeOption>,
    },
    /// Petition listing
    Petitions {
        /// All petitions, most votes first
        petitions: Vec<Petition>,
    },
    /// Report listing
    Reports {
        /// All reports, newest first
        reports: Vec<Report>,
    },
    /// Analytics dashboard
    Analytics {
        /// Aggregate counters
        analytics: AnalyticsSnapshot,
    },
    /// Session activity
    MyActivity {
        /// Current identity
        citizen: Option<Citizen>,
        /// Petitions created
        petitions: Vec<Petition>,
        /// Reports submitted
        reports: Vec<Report>,
        /// All notifications, newest first
        notifications: Vec<Notification>,
    },
}

pub(super) fn landing() -> PageView {
    PageView::Landing {
        headline: "Welcome to MAU2",
        tagline: "Your platform for civic engagement. Create, track, and resolve community \
                  issues with transparency and collaboration.",
        features: vec![
            Feature {
                title: "Create Petitions",
                summary: "Start petitions for community issues and gather support from fellow \
                          citizens.",
            },
            Feature {
                title: "Report Issues",
                summary: "Report incidents and issues in your community with location-based \
                          routing.",
            },
            Feature {
                title: "Track Progress",
                summary: "Monitor the status and progress of your petitions and community \
                          issues.",
            },
        ],
    }
}

pub(super) const fn onboarding() -> PageView {
    PageView::Onboarding {
        heading: "Know Your Rights",
        body: "As a citizen, you have the right to petition your government and escalate \
               issues through proper channels. MAU2 helps you navigate this process \
               effectively.",
    }
}

pub(super) fn dashboard(
    citizen: Option<&Citizen>,
    petitions: &[Petition],
    reports: &[Report],
    notifications: &[Notification],
) -> PageView {
    const FEED_LEN: usize = 4;

    PageView::Dashboard {
        profile: Profile {
            name: citizen.map_or_else(|| GUEST.to_string(), |c| c.name.clone()),
            role: "Citizen",
            petitions: petitions.len(),
            reports: reports.len(),
            resolved: petitions
                .iter()
                .filter(|p| p.status == PetitionStatus::Responded)
                .count(),
        },
        quick_actions: vec![
            Page::CreatePetition,
            Page::ReportIncident,
            Page::MyActivity,
            Page::Analytics,
        ],
        petitions: petitions.iter().rev().take(FEED_LEN).cloned().collect(),
        reports: reports.iter().rev().take(FEED_LEN).cloned().collect(),
        notifications: notifications.iter().rev().take(FEED_LEN).cloned().collect(),
    }
}

pub(super) fn register(citizen: Option<&Citizen>) -> PageView {
    PageView::Register {
        fields: vec![
            field("name", "Full Name", true),
            field("email", "Email", true),
            field("location", "Location", true),
            field("interests", "Interests", false),
        ],
        citizen: citizen.cloned(),
    }
}

pub(super) fn create_petition(draft: Option<&PetitionDraft>) -> PageView {
    PageView::CreatePetition {
        fields: vec![
            field("title", "Petition Title", true),
            field("category", "Category", true),
            field("description", "Description", true),
        ],
        categories: PetitionCategory::ALL.to_vec(),
        draft: draft.cloned(),
    }
}

pub(super) fn petition_evidence(evidence: &Evidence, has_draft: bool) -> PageView {
    PageView::PetitionEvidence {
        fields: vec![
            field("files", "Upload Evidence", false),
            field("location", "Location", false),
            field("auto_timestamp", "Auto-snap timestamp from evidence metadata", false),
            field("auto_geotag", "Auto-snap geotag from evidence metadata", false),
        ],
        accepted_extensions: EVIDENCE_EXTENSIONS.to_vec(),
        evidence: evidence.clone(),
        has_draft,
    }
}

pub(super) const fn petition_review(summary: PetitionSummary) -> PageView {
    PageView::PetitionReview { summary }
}

pub(super) fn report_incident() -> PageView {
    PageView::ReportIncident {
        fields: vec![
            field("type", "Report Type", true),
            field("description", "Description", true),
            field("location", "Location", true),
            field("reporter", "Your Name", false),
            field("anonymous", "Report anonymously", false),
        ],
        report_types: ReportType::ALL
            .into_iter()
            .map(|t| {
                let (department, urgency) = static_table::report_route(t);
                ReportTypeOption {
                    report_type: t,
                    label: t.label(),
                    department,
                    urgency,
                }
            })
            .collect(),
    }
}

pub(super) fn petitions(petitions: &[Petition]) -> PageView {
    let mut petitions = petitions.to_vec();
    petitions.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    PageView::Petitions { petitions }
}

pub(super) fn reports(reports: &[Report]) -> PageView {
    PageView::Reports {
        reports: reports.iter().rev().cloned().collect(),
    }
}

pub(super) const fn analytics(analytics: AnalyticsSnapshot) -> PageView {
    PageView::Analytics { analytics }
}

pub(super) fn my_activity(
    citizen: Option<&Citizen>,
    petitions: &[Petition],
    reports: &[Report],
    notifications: &[Notification],
) -> PageView {
    PageView::MyActivity {
        citizen: citizen.cloned(),
        petitions: petitions.to_vec(),
        reports: reports.to_vec(),
        notifications: notifications.iter().rev().cloned().collect(),
    }
}
