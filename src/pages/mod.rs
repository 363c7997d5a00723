//! Page dispatcher
//!
//! Maps a page label to its render function. Selection and Next/Back
//! navigation only move the session's current page; there are no guards,
//! so the wizard's later steps can be reached without a draft (the review
//! then shows placeholders).

mod page;
mod views;

pub use page::Page;
pub use views::{Feature, FormField, PageView, Profile, ReportTypeOption};

use serde::Serialize;

use crate::core::services::{AnalyticsSnapshot, wizard};
use crate::session::Session;

/// A rendered page with its navigation controls
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// Page label
    pub page: Page,
    /// Wizard step (1-3) for petition pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u8>,
    /// Target of the "Next" control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
    /// Target of the "Back" control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<Page>,
    /// Page content
    pub view: PageView,
}

/// Render a page for a session without changing the session
#[must_use]
pub fn render(page: Page, session: &Session) -> RenderedPage {
    let citizen = session.active_citizen();
    let view = match page {
        Page::Landing => views::landing(),
        Page::Onboarding => views::onboarding(),
        Page::Dashboard => views::dashboard(
            citizen,
            session.petitions(),
            session.reports(),
            session.notifications(),
        ),
        Page::Register => views::register(citizen),
        Page::CreatePetition => views::create_petition(session.wizard.draft.as_ref()),
        Page::PetitionEvidence => views::petition_evidence(
            &session.wizard.evidence,
            session.wizard.draft.is_some(),
        ),
        Page::PetitionReview => views::petition_review(wizard::review(session)),
        Page::ReportIncident => views::report_incident(),
        Page::Petitions => views::petitions(session.petitions()),
        Page::Reports => views::reports(session.reports()),
        Page::Analytics => views::analytics(AnalyticsSnapshot::collect(session)),
        Page::MyActivity => views::my_activity(
            citizen,
            session.petitions(),
            session.reports(),
            session.notifications(),
        ),
    };

    RenderedPage {
        page,
        step: page.wizard_step(),
        next: page.next(),
        back: page.back(),
        view,
    }
}

/// Select a page by label and render it
///
/// Unknown labels select the dashboard.
pub fn select(session: &mut Session, label: &str) -> RenderedPage {
    let page = Page::from_label(label);
    session.current_page = page;
    render(page, session)
}

/// Follow the "Next" control; pages without one stay put
pub fn next(session: &mut Session) -> RenderedPage {
    if let Some(page) = session.current_page.next() {
        session.current_page = page;
    }
    render(session.current_page, session)
}

/// Follow the "Back" control; pages without one stay put
pub fn back(session: &mut Session) -> RenderedPage {
    if let Some(page) = session.current_page.back() {
        session.current_page = page;
    }
    render(session.current_page, session)
}

/// Render whatever page the session is on
#[must_use]
pub fn current(session: &Session) -> RenderedPage {
    render(session.current_page, session)
}
