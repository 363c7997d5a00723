//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients (CLI, tests).
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the session context and typed input,
//!   return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    attach_evidence, classify_petition, classify_report, create_petition, create_report,
    get_analytics, get_petition, get_session, health, list_petitions, list_reports, navigate,
    navigate_back, navigate_next, register_citizen, respond_to_petition, review_draft, save_draft,
    set_privacy, show_page, submit_draft, upvote_petition,
};
pub use types::{
    ApiResponse, ClassifyPetitionRequest, ClassifyReportRequest, HealthData, NavigateRequest,
    PetitionsData, ReportsData, SessionCounts, SessionData, VoteData,
};
