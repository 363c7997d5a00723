//! Per-session state
//!
//! A [`Session`] is the explicit context object every handler receives. It
//! owns the lists of submitted entities, the wizard state and the current
//! page. Nothing here is persisted; a session lives until the
//! [`SessionStore`] that owns it evicts it for being idle.

mod draft;
mod ids;
mod store;

pub use draft::{Evidence, PetitionDraft, WizardState};
pub use ids::IdSequence;
pub use store::{DEFAULT_SESSION_TTL, SessionStore};

use chrono::{DateTime, Utc};

use crate::core::models::{Citizen, Notification, Petition, Report};
use crate::pages::Page;

/// State of one browser session
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    created_at: String,
    last_seen: DateTime<Utc>,
    /// Page the session is looking at
    pub current_page: Page,
    /// Petition wizard progress
    pub wizard: WizardState,
    citizens: Vec<Citizen>,
    petitions: Vec<Petition>,
    reports: Vec<Report>,
    notifications: Vec<Notification>,
    citizen_ids: IdSequence,
    petition_ids: IdSequence,
    report_ids: IdSequence,
}

impl Session {
    /// Create an empty session on the landing page
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            created_at: now.to_rfc3339(),
            last_seen: now,
            current_page: Page::Landing,
            wizard: WizardState::default(),
            citizens: Vec::new(),
            petitions: Vec::new(),
            reports: Vec::new(),
            notifications: Vec::new(),
            citizen_ids: IdSequence::new("CIT"),
            petition_ids: IdSequence::new("PET"),
            report_ids: IdSequence::new("RPT"),
        }
    }

    /// Session identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session was created (RFC3339)
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// When a request last used the session
    #[must_use]
    pub const fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    /// Record activity at `now`
    pub const fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }

    // === Citizens ===

    /// All registered citizens, oldest first
    #[must_use]
    pub fn citizens(&self) -> &[Citizen] {
        &self.citizens
    }

    /// The identity this session acts as (most recent registration)
    #[must_use]
    pub fn active_citizen(&self) -> Option<&Citizen> {
        self.citizens.last()
    }

    /// Allocate an id, build the citizen and store it
    pub fn add_citizen(&mut self, build: impl FnOnce(String) -> Citizen) -> &Citizen {
        let citizen = build(self.citizen_ids.next_id());
        self.citizens.push(citizen);
        &self.citizens[self.citizens.len() - 1]
    }

    // === Petitions ===

    /// All petitions, oldest first
    #[must_use]
    pub fn petitions(&self) -> &[Petition] {
        &self.petitions
    }

    /// Look up a petition by id
    #[must_use]
    pub fn petition(&self, id: &str) -> Option<&Petition> {
        self.petitions.iter().find(|p| p.id == id)
    }

    /// Look up a petition by id for mutation
    pub fn petition_mut(&mut self, id: &str) -> Option<&mut Petition> {
        self.petitions.iter_mut().find(|p| p.id == id)
    }

    /// Allocate an id, build the petition and store it
    pub fn add_petition(&mut self, build: impl FnOnce(String) -> Petition) -> &Petition {
        let petition = build(self.petition_ids.next_id());
        self.petitions.push(petition);
        &self.petitions[self.petitions.len() - 1]
    }

    // === Reports ===

    /// All reports, oldest first
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Allocate an id, build the report and store it
    pub fn add_report(&mut self, build: impl FnOnce(String) -> Report) -> &Report {
        let report = build(self.report_ids.next_id());
        self.reports.push(report);
        &self.reports[self.reports.len() - 1]
    }

    // === Notifications ===

    /// Notifications, oldest first
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Append a notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
