//! Business logic services
//!
//! Pure orchestration logic that operates on a [`Session`](crate::session::Session)
//! passed in by the caller. The only external collaborator is the
//! [`Classifier`](crate::core::ports::Classifier) port.
//!
//! - [`intake`] - Validate forms and append entities
//! - [`wizard`] - Three-step petition creation
//! - [`analytics`] - Aggregate counters for the dashboard

pub mod analytics;
pub mod intake;
pub mod wizard;

pub use analytics::{AnalyticsSnapshot, PetitionRank};
pub use intake::{
    CitizenForm, IntakeError, PetitionForm, ReportForm, ResponseForm, register_citizen,
    respond_to_petition, submit_petition, submit_report, upvote_petition,
};
pub use wizard::{
    DraftForm, EvidenceForm, PetitionSummary, PrivacyForm, attach_evidence, review, save_draft,
    set_privacy, submit_draft,
};
