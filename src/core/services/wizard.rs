//! Petition wizard
//!
//! Three steps (draft, evidence, review) kept in the session's
//! [`WizardState`](crate::session::WizardState). Only the first step and the
//! final submit validate; the steps themselves can be visited in any order.

use serde::{Deserialize, Serialize};

use crate::core::models::{Petition, Privacy};
use crate::core::ports::Classifier;
use crate::pages::Page;
use crate::session::{Evidence, PetitionDraft, Session};

use super::intake::{self, IntakeError, PetitionForm, Required};

/// Placeholder shown for review fields with no data
pub const NOT_AVAILABLE: &str = "N/A";

/// Descriptions longer than this are truncated on the review step
pub const SUMMARY_DESCRIPTION_CHARS: usize = 100;

/// Step 1 form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftForm {
    /// Petition title
    #[serde(default)]
    pub title: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Full description
    #[serde(default)]
    pub description: String,
}

/// Step 2 form
#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceForm {
    /// Where the issue is
    #[serde(default)]
    pub location: Option<String>,
    /// Uploaded file names
    #[serde(default)]
    pub files: Vec<String>,
    /// Take the timestamp from evidence metadata
    #[serde(default = "default_true")]
    pub auto_timestamp: bool,
    /// Take the geotag from evidence metadata
    #[serde(default = "default_true")]
    pub auto_geotag: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for EvidenceForm {
    fn default() -> Self {
        Self {
            location: None,
            files: Vec::new(),
            auto_timestamp: true,
            auto_geotag: true,
        }
    }
}

/// Step 3 privacy controls
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PrivacyForm {
    /// Identity display setting
    #[serde(default)]
    pub privacy: Privacy,
    /// Hide the creator entirely
    #[serde(default)]
    pub incognito: bool,
}

/// Review step summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetitionSummary {
    /// Title or "N/A"
    pub title: String,
    /// Description (truncated) or "N/A"
    pub description: String,
    /// Category label or "N/A"
    pub category: String,
    /// Location or "N/A"
    pub location: String,
    /// Number of evidence files
    pub evidence_count: usize,
    /// Identity display setting
    pub privacy: Privacy,
    /// Incognito toggle
    pub incognito: bool,
    /// Whether a submit would succeed
    pub ready: bool,
}

/// Validate step 1 and move on to the evidence step
///
/// On failure the session stays on the first step and nothing is stored.
pub fn save_draft(session: &mut Session, form: &DraftForm) -> Result<PetitionDraft, IntakeError> {
    session.current_page = Page::CreatePetition;

    let mut required = Required::default();
    let title = required.text("title", &form.title);
    let category = required.category(&form.category);
    let description = required.text("description", &form.description);
    required.finish()?;
    let category = intake::parse_category(category)?;

    let draft = PetitionDraft {
        title: title.to_string(),
        category,
        description: description.to_string(),
    };
    session.wizard.draft = Some(draft.clone());
    session.current_page = Page::PetitionEvidence;
    log::debug!("Session {} saved petition draft", session.id());
    Ok(draft)
}

/// Record step 2 and move on to the review step
pub fn attach_evidence(
    session: &mut Session,
    form: &EvidenceForm,
) -> Result<Evidence, IntakeError> {
    session.current_page = Page::PetitionEvidence;

    let files = intake::check_evidence(&form.files)?;
    let evidence = Evidence {
        location: form
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from),
        files,
        auto_timestamp: form.auto_timestamp,
        auto_geotag: form.auto_geotag,
    };
    session.wizard.evidence = evidence.clone();
    session.current_page = Page::PetitionReview;
    Ok(evidence)
}

/// Record the privacy controls of step 3
pub fn set_privacy(session: &mut Session, form: PrivacyForm) -> PetitionSummary {
    session.wizard.privacy = form.privacy;
    session.wizard.incognito = form.incognito;
    review(session)
}

/// Summarize what the wizard would submit
///
/// Missing data shows as "N/A" rather than failing, so the review step can
/// be reached without a draft.
#[must_use]
pub fn review(session: &Session) -> PetitionSummary {
    let wizard = &session.wizard;
    let draft = wizard.draft.as_ref();
    PetitionSummary {
        title: draft.map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.title.clone()),
        description: draft
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| truncate_description(&d.description)),
        category: draft.map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.category.to_string()),
        location: wizard
            .evidence
            .location
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        evidence_count: wizard.evidence.files.len(),
        privacy: wizard.privacy,
        incognito: wizard.incognito,
        ready: draft.is_some(),
    }
}

/// Submit the collected draft as a petition
///
/// Clears the wizard and returns to the dashboard on success. Without a
/// draft the session stays on the review step.
pub fn submit_draft(
    session: &mut Session,
    classifier: &dyn Classifier,
) -> Result<Petition, IntakeError> {
    session.current_page = Page::PetitionReview;

    let draft = session.wizard.draft.clone().ok_or(IntakeError::NoDraft)?;
    let form = PetitionForm {
        title: draft.title,
        description: draft.description,
        category: draft.category.label().to_string(),
        location: session.wizard.evidence.location.clone(),
        evidence: session.wizard.evidence.files.clone(),
        privacy: session.wizard.privacy,
        incognito: session.wizard.incognito,
        creator: None,
    };

    let petition = intake::submit_petition(session, classifier, &form)?;
    session.wizard.clear();
    session.current_page = Page::Dashboard;
    Ok(petition)
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() > SUMMARY_DESCRIPTION_CHARS {
        let head: String = description.chars().take(SUMMARY_DESCRIPTION_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}
