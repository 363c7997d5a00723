//! Form intake
//!
//! Validates submitted forms and appends the resulting entities to the
//! session. Validation is presence-only: a required field is missing when it
//! is empty after trimming. A failed submission never touches the session.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{
    ANONYMOUS, CATEGORY_PLACEHOLDER, Citizen, Notification, Petition, PetitionCategory, Privacy,
    Report, ReportType, RoutingSource,
};
use crate::core::ports::Classifier;
use crate::session::Session;

/// Creator name used when the session has no registered citizen
pub const GUEST: &str = "Guest";

/// File extensions accepted as petition evidence
pub const EVIDENCE_EXTENSIONS: [&str; 5] = ["jpg", "png", "mp4", "pdf", "mp3"];

/// Validation and lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// One or more required fields are empty
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// An enumerated field holds an unknown value
    #[error("{0}")]
    InvalidChoice(String),

    /// Evidence file with an unsupported extension
    #[error("Unsupported evidence file: {0}. Supported: jpg, png, mp4, pdf, mp3")]
    UnsupportedEvidence(String),

    /// Wizard submit without a validated first step
    #[error("No petition draft to submit. Complete the first step")]
    NoDraft,

    /// Unknown petition id
    #[error("Petition '{0}' not found")]
    PetitionNotFound(String),
}

impl IntakeError {
    /// Whether this error means the addressed entity does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PetitionNotFound(_))
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// Citizen registration form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitizenForm {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Neighbourhood or town
    #[serde(default)]
    pub location: String,
    /// Followed topics
    #[serde(default)]
    pub interests: Vec<String>,
}

/// One-shot petition form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetitionForm {
    /// Petition title
    #[serde(default)]
    pub title: String,
    /// Full description
    #[serde(default)]
    pub description: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Where the issue is
    #[serde(default)]
    pub location: Option<String>,
    /// Evidence file names
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Identity display setting
    #[serde(default)]
    pub privacy: Privacy,
    /// Hide the creator entirely
    #[serde(default)]
    pub incognito: bool,
    /// Creator name, defaults to the session's citizen
    #[serde(default)]
    pub creator: Option<String>,
}

/// Incident report form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportForm {
    /// Report type label
    #[serde(default, rename = "type", alias = "report_type")]
    pub report_type: String,
    /// What happened
    #[serde(default)]
    pub description: String,
    /// Where it happened
    #[serde(default)]
    pub location: String,
    /// Reporter name, defaults to the session's citizen
    #[serde(default)]
    pub reporter: Option<String>,
    /// Submit without identity
    #[serde(default, alias = "incognito")]
    pub anonymous: bool,
}

/// Official response to a petition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseForm {
    /// Responding public body
    #[serde(default)]
    pub responder: String,
    /// Response text
    #[serde(default)]
    pub body: String,
}

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

/// Collects the names of empty required fields
#[derive(Debug, Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Check a free-text field, returning it trimmed
    pub(crate) fn text<'a>(&mut self, field: &'static str, value: &'a str) -> &'a str {
        let value = value.trim();
        if value.is_empty() {
            self.missing.push(field);
        }
        value
    }

    /// Check a category field; the form placeholder counts as empty
    pub(crate) fn category<'a>(&mut self, value: &'a str) -> &'a str {
        let value = value.trim();
        if value.is_empty() || value == CATEGORY_PLACEHOLDER {
            self.missing.push("category");
        }
        value
    }

    /// Fail if anything was missing
    pub(crate) fn finish(self) -> Result<(), IntakeError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::MissingFields(self.missing))
        }
    }
}

pub(crate) fn parse_category(value: &str) -> Result<PetitionCategory, IntakeError> {
    value.parse().map_err(IntakeError::InvalidChoice)
}

fn parse_report_type(value: &str) -> Result<ReportType, IntakeError> {
    value.parse().map_err(IntakeError::InvalidChoice)
}

/// Check that every evidence file has a supported extension
pub(crate) fn check_evidence(files: &[String]) -> Result<Vec<String>, IntakeError> {
    files
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(|f| {
            let supported = Path::new(f)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EVIDENCE_EXTENSIONS.contains(&e.to_lowercase().as_str()));
            if supported {
                Ok(f.to_string())
            } else {
                Err(IntakeError::UnsupportedEvidence(f.to_string()))
            }
        })
        .collect()
}

fn fallback_notice(id: &str) -> Notification {
    Notification::warning(format!(
        "Routing service unavailable; {id} was routed by the static table"
    ))
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Register a citizen; the newest registration becomes the session identity
pub fn register_citizen(
    session: &mut Session,
    form: &CitizenForm,
) -> Result<Citizen, IntakeError> {
    let mut required = Required::default();
    let name = required.text("name", &form.name);
    let email = required.text("email", &form.email);
    let location = required.text("location", &form.location);
    required.finish()?;

    let interests: BTreeSet<String> = form
        .interests
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(String::from)
        .collect();

    let citizen = session
        .add_citizen(|id| {
            Citizen::new(id, name.to_string(), email.to_string(), location.to_string(), interests)
        })
        .clone();

    log::info!("Registered citizen {}", citizen.id);
    session.notify(Notification::success(format!("Welcome to MAU2, {}", citizen.name)));
    Ok(citizen)
}

/// Submit a petition
///
/// The petition starts active with one vote. The classifier picks the public
/// body it is forwarded to.
pub fn submit_petition(
    session: &mut Session,
    classifier: &dyn Classifier,
    form: &PetitionForm,
) -> Result<Petition, IntakeError> {
    let mut required = Required::default();
    let title = required.text("title", &form.title);
    let category = required.category(&form.category);
    let description = required.text("description", &form.description);
    required.finish()?;

    let category = parse_category(category)?;
    let evidence = check_evidence(&form.evidence)?;

    let creator = if form.incognito {
        ANONYMOUS.to_string()
    } else {
        non_empty(form.creator.as_ref())
            .or_else(|| session.active_citizen().map(|c| c.name.clone()))
            .unwrap_or_else(|| GUEST.to_string())
    };

    let categorization = classifier.categorize_petition(category, title, description);
    let location = non_empty(form.location.as_ref());

    let petition = session
        .add_petition(|id| {
            let mut petition = Petition::new(
                id,
                title.to_string(),
                description.to_string(),
                creator,
                categorization,
            );
            petition.location = location;
            petition.evidence = evidence;
            petition.privacy = form.privacy;
            petition.incognito = form.incognito;
            petition
        })
        .clone();

    log::info!(
        "Petition {} submitted ({}, routed to {} via {})",
        petition.id,
        petition.category,
        petition.department,
        petition.routing_source
    );
    session.notify(Notification::success(format!(
        "Petition {} submitted and forwarded to {}",
        petition.id, petition.department
    )));
    if petition.routing_source == RoutingSource::Fallback {
        session.notify(fallback_notice(&petition.id));
    }
    Ok(petition)
}

/// Submit an incident report
///
/// Anonymous reports store [`ANONYMOUS`] as the reporter. Otherwise the
/// reporter is the given name or the session's citizen; a report with
/// neither is missing its `reporter` field.
pub fn submit_report(
    session: &mut Session,
    classifier: &dyn Classifier,
    form: &ReportForm,
) -> Result<Report, IntakeError> {
    let mut required = Required::default();
    let report_type = required.text("type", &form.report_type);
    let description = required.text("description", &form.description);
    let location = required.text("location", &form.location);

    let reporter = if form.anonymous {
        None
    } else {
        let name = non_empty(form.reporter.as_ref())
            .or_else(|| session.active_citizen().map(|c| c.name.clone()));
        if name.is_none() {
            required.text("reporter", "");
        }
        name
    };
    required.finish()?;

    let report_type = parse_report_type(report_type)?;
    let routing = classifier.route_report(report_type, description, location);

    let report = session
        .add_report(|id| {
            Report::new(
                id,
                report_type,
                description.to_string(),
                location.to_string(),
                reporter,
                form.anonymous,
                routing,
            )
        })
        .clone();

    log::info!(
        "Report {} submitted ({}, routed to {} via {})",
        report.id,
        report.report_type,
        report.routing.department,
        report.routing.source
    );
    session.notify(Notification::success(format!(
        "Report {} submitted and routed to {}",
        report.id, report.routing.department
    )));
    if report.routing.source == RoutingSource::Fallback {
        session.notify(fallback_notice(&report.id));
    }
    Ok(report)
}

/// Add one vote to a petition, returning the new count
pub fn upvote_petition(session: &mut Session, id: &str) -> Result<u32, IntakeError> {
    let petition = session
        .petition_mut(id)
        .ok_or_else(|| IntakeError::PetitionNotFound(id.to_string()))?;
    let votes = petition.upvote();
    log::debug!("Petition {id} now has {votes} vote(s)");
    Ok(votes)
}

/// Attach an official response to a petition
pub fn respond_to_petition(
    session: &mut Session,
    id: &str,
    form: &ResponseForm,
) -> Result<Petition, IntakeError> {
    let mut required = Required::default();
    let responder = required.text("responder", &form.responder);
    let body = required.text("body", &form.body);
    required.finish()?;

    let petition = session
        .petition_mut(id)
        .ok_or_else(|| IntakeError::PetitionNotFound(id.to_string()))?;
    petition.respond(responder.to_string(), body.to_string());
    let petition = petition.clone();

    log::info!("Petition {id} responded by {responder}");
    session.notify(Notification::info(format!(
        "Petition {id} received a response from {responder}"
    )));
    Ok(petition)
}
