//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic. They take
//! the caller's session (and classifier, where routing happens) plus typed
//! input, and return `Result<T, ApiError>`.

use crate::core::models::{
    Categorization, Citizen, Petition, PetitionCategory, Report, ReportType, Routing,
};
use crate::core::ports::Classifier;
use crate::core::services::{
    self, AnalyticsSnapshot, CitizenForm, DraftForm, EvidenceForm, PetitionForm, PetitionSummary,
    PrivacyForm, ReportForm, ResponseForm,
};
use crate::pages::{self, RenderedPage};
use crate::session::{Evidence, PetitionDraft, Session};

use super::error::ApiError;
use super::types::{
    ClassifyPetitionRequest, ClassifyReportRequest, HealthData, NavigateRequest, PetitionsData,
    ReportsData, SessionCounts, SessionData, VoteData,
};

// =============================================================================
// STATUS
// =============================================================================

/// Liveness and configuration summary
#[must_use]
pub fn health(classifier: &dyn Classifier) -> HealthData {
    HealthData {
        status: "ok",
        version: crate::VERSION,
        classifier: classifier.name(),
    }
}

/// Describe the caller's session
pub fn get_session(session: &Session) -> Result<SessionData, ApiError> {
    Ok(SessionData {
        session_id: session.id().to_string(),
        created_at: session.created_at().to_string(),
        current_page: session.current_page,
        citizen: session.active_citizen().cloned(),
        counts: SessionCounts {
            citizens: session.citizens().len(),
            petitions: session.petitions().len(),
            reports: session.reports().len(),
            notifications: session.notifications().len(),
        },
        has_draft: session.wizard.draft.is_some(),
    })
}

// =============================================================================
// PAGES
// =============================================================================

/// Select and render a page by label
pub fn show_page(session: &mut Session, label: &str) -> Result<RenderedPage, ApiError> {
    Ok(pages::select(session, label))
}

/// Select a page from a request body
pub fn navigate(session: &mut Session, req: &NavigateRequest) -> Result<RenderedPage, ApiError> {
    Ok(pages::select(session, &req.page))
}

/// Follow the "Next" control
pub fn navigate_next(session: &mut Session) -> Result<RenderedPage, ApiError> {
    Ok(pages::next(session))
}

/// Follow the "Back" control
pub fn navigate_back(session: &mut Session) -> Result<RenderedPage, ApiError> {
    Ok(pages::back(session))
}

// =============================================================================
// CITIZENS
// =============================================================================

/// Register a citizen
pub fn register_citizen(session: &mut Session, req: &CitizenForm) -> Result<Citizen, ApiError> {
    Ok(services::register_citizen(session, req)?)
}

// =============================================================================
// PETITIONS
// =============================================================================

/// List petitions
pub fn list_petitions(session: &Session) -> Result<PetitionsData, ApiError> {
    Ok(PetitionsData {
        petitions: session.petitions().to_vec(),
    })
}

/// Get a single petition by id
pub fn get_petition(session: &Session, id: &str) -> Result<Petition, ApiError> {
    session
        .petition(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("Petition '{id}' not found")))
}

/// Submit a petition in one request
pub fn create_petition(
    session: &mut Session,
    classifier: &dyn Classifier,
    req: &PetitionForm,
) -> Result<Petition, ApiError> {
    Ok(services::submit_petition(session, classifier, req)?)
}

/// Add one vote to a petition
pub fn upvote_petition(session: &mut Session, id: &str) -> Result<VoteData, ApiError> {
    let vote_count = services::upvote_petition(session, id)?;
    Ok(VoteData {
        id: id.to_string(),
        vote_count,
    })
}

/// Attach an official response to a petition
pub fn respond_to_petition(
    session: &mut Session,
    id: &str,
    req: &ResponseForm,
) -> Result<Petition, ApiError> {
    Ok(services::respond_to_petition(session, id, req)?)
}

// =============================================================================
// PETITION WIZARD
// =============================================================================

/// Wizard step 1
pub fn save_draft(session: &mut Session, req: &DraftForm) -> Result<PetitionDraft, ApiError> {
    Ok(services::save_draft(session, req)?)
}

/// Wizard step 2
pub fn attach_evidence(session: &mut Session, req: &EvidenceForm) -> Result<Evidence, ApiError> {
    Ok(services::attach_evidence(session, req)?)
}

/// Wizard step 3 privacy controls
pub fn set_privacy(session: &mut Session, req: &PrivacyForm) -> Result<PetitionSummary, ApiError> {
    Ok(services::set_privacy(session, *req))
}

/// Wizard step 3 summary
pub fn review_draft(session: &Session) -> Result<PetitionSummary, ApiError> {
    Ok(services::review(session))
}

/// Wizard submit
pub fn submit_draft(
    session: &mut Session,
    classifier: &dyn Classifier,
) -> Result<Petition, ApiError> {
    Ok(services::submit_draft(session, classifier)?)
}

// =============================================================================
// REPORTS
// =============================================================================

/// List reports
pub fn list_reports(session: &Session) -> Result<ReportsData, ApiError> {
    Ok(ReportsData {
        reports: session.reports().to_vec(),
    })
}

/// Submit an incident report
pub fn create_report(
    session: &mut Session,
    classifier: &dyn Classifier,
    req: &ReportForm,
) -> Result<Report, ApiError> {
    Ok(services::submit_report(session, classifier, req)?)
}

// =============================================================================
// ANALYTICS & CLASSIFICATION
// =============================================================================

/// Aggregate counters for the session
pub fn get_analytics(session: &Session) -> Result<AnalyticsSnapshot, ApiError> {
    Ok(AnalyticsSnapshot::collect(session))
}

/// Route a report without storing it
pub fn classify_report(
    classifier: &dyn Classifier,
    req: &ClassifyReportRequest,
) -> Result<Routing, ApiError> {
    let report_type: ReportType = req.report_type.parse().map_err(ApiError::validation)?;
    Ok(classifier.route_report(report_type, req.description.trim(), req.location.trim()))
}

/// Categorize a petition without storing it
pub fn classify_petition(
    classifier: &dyn Classifier,
    req: &ClassifyPetitionRequest,
) -> Result<Categorization, ApiError> {
    let category: PetitionCategory = req.category.parse().map_err(ApiError::validation)?;
    Ok(classifier.categorize_petition(category, req.title.trim(), req.description.trim()))
}
