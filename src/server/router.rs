//! Request routing
//!
//! Routing is independent of the socket layer: [`AppState::handle`] takes
//! the method, URL, session header and body of a request and returns a
//! [`Reply`]. Both `/api/v1/...` and `/api/...` prefixes are accepted.
//!
//! Only routes that read or change session state resolve a session. Health
//! checks, classification and unknown routes leave the store untouched.

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::Method;

use crate::api::{self, ApiError, ApiResponse};
use crate::core::ports::Classifier;
use crate::session::{Session, SessionStore};

/// Header carrying the session id in both directions
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Everything the request loop owns
pub struct AppState {
    sessions: SessionStore,
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.len())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

/// Routed response, ready to be written by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// JSON envelope
    pub body: String,
    /// Session the request ran in, if it needed one
    pub session_id: Option<String>,
}

impl AppState {
    /// Create state with no sessions and the default session lifetime
    #[must_use]
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self::with_sessions(classifier, SessionStore::new())
    }

    /// Create state over an existing session store
    #[must_use]
    pub fn with_sessions(classifier: Box<dyn Classifier>, sessions: SessionStore) -> Self {
        Self {
            sessions,
            classifier,
        }
    }

    /// Live sessions
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Route one request
    ///
    /// Session routes resolve `session_id`, starting a new session when it
    /// is missing, unknown or expired; their reply names that session.
    pub fn handle(
        &mut self,
        method: &Method,
        url: &str,
        session_id: Option<&str>,
        body: &str,
    ) -> Reply {
        let path = url.split('?').next().unwrap_or(url);
        let api_path = path
            .strip_prefix("/api/v1")
            .or_else(|| path.strip_prefix("/api"))
            .unwrap_or(path);

        let Some(route) = Route::parse(method, api_path) else {
            log::debug!("{method} {path} -> 404");
            let (status, body) = not_found(method, api_path);
            return Reply {
                status,
                body,
                session_id: None,
            };
        };

        let classifier = self.classifier.as_ref();
        let (status, body, session_id) = match route {
            Route::Open(route) => {
                let (status, body) = open(route, classifier, body);
                (status, body, None)
            },
            Route::Session(route) => {
                let session = self.sessions.resolve(session_id);
                let (status, body) = in_session(route, session, classifier, body);
                (status, body, Some(session.id().to_string()))
            },
        };

        log::debug!(
            "{method} {path} -> {status} (session {})",
            session_id.as_deref().unwrap_or("-")
        );
        Reply {
            status,
            body,
            session_id,
        }
    }

    /// Answer with an error without routing, e.g. when the body was unreadable
    ///
    /// The session header is echoed only when it names a live session.
    #[must_use]
    pub fn reject(&self, session_id: Option<&str>, error: &ApiError) -> Reply {
        let (status, body) = error_response(error);
        Reply {
            status,
            body,
            session_id: session_id
                .filter(|id| self.sessions.get(id).is_some())
                .map(String::from),
        }
    }
}

// =============================================================================
// ROUTES
// =============================================================================

/// A recognized endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    /// Answered without touching the session store
    Open(OpenRoute),
    /// Reads or changes the caller's session
    Session(SessionRoute<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenRoute {
    Health,
    ClassifyReport,
    ClassifyPetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionRoute<'a> {
    Session,
    Page(&'a str),
    Navigate,
    NavigateNext,
    NavigateBack,
    RegisterCitizen,
    ListPetitions,
    CreatePetition,
    GetPetition(&'a str),
    Upvote(&'a str),
    Respond(&'a str),
    SaveDraft,
    AttachEvidence,
    SetPrivacy,
    ReviewDraft,
    SubmitDraft,
    ListReports,
    CreateReport,
    Analytics,
}

impl<'a> Route<'a> {
    fn parse(method: &Method, path: &'a str) -> Option<Self> {
        use SessionRoute as S;

        let session = match (method, path) {
            (&Method::Get, "/health") => return Some(Self::Open(OpenRoute::Health)),
            (&Method::Post, "/classify/report") => {
                return Some(Self::Open(OpenRoute::ClassifyReport));
            },
            (&Method::Post, "/classify/petition") => {
                return Some(Self::Open(OpenRoute::ClassifyPetition));
            },

            (&Method::Get, "/session") => S::Session,
            (&Method::Post, "/navigate") => S::Navigate,
            (&Method::Post, "/navigate/next") => S::NavigateNext,
            (&Method::Post, "/navigate/back") => S::NavigateBack,
            (&Method::Post, "/citizens") => S::RegisterCitizen,
            (&Method::Get, "/petitions") => S::ListPetitions,
            (&Method::Post, "/petitions") => S::CreatePetition,
            (&Method::Post, "/wizard/draft") => S::SaveDraft,
            (&Method::Post, "/wizard/evidence") => S::AttachEvidence,
            (&Method::Post, "/wizard/privacy") => S::SetPrivacy,
            (&Method::Get, "/wizard/review") => S::ReviewDraft,
            (&Method::Post, "/wizard/submit") => S::SubmitDraft,
            (&Method::Get, "/reports") => S::ListReports,
            (&Method::Post, "/reports") => S::CreateReport,
            (&Method::Get, "/analytics") => S::Analytics,

            // GET /pages/{label}
            (&Method::Get, _) if path.starts_with("/pages/") => {
                S::Page(path.strip_prefix("/pages/").unwrap_or(""))
            },

            // GET /petitions/{id}, POST /petitions/{id}/upvote|respond
            _ if path.starts_with("/petitions/") => {
                let rest = path.strip_prefix("/petitions/").unwrap_or("");
                match (method, rest.split_once('/')) {
                    (&Method::Get, None) => S::GetPetition(rest),
                    (&Method::Post, Some((id, "upvote"))) => S::Upvote(id),
                    (&Method::Post, Some((id, "respond"))) => S::Respond(id),
                    _ => return None,
                }
            },

            _ => return None,
        };
        Some(Self::Session(session))
    }
}

fn open(route: OpenRoute, classifier: &dyn Classifier, body: &str) -> (u16, String) {
    match route {
        OpenRoute::Health => success_response(api::health(classifier)),
        OpenRoute::ClassifyReport => {
            handle_result(read_json(body).and_then(|req| api::classify_report(classifier, &req)))
        },
        OpenRoute::ClassifyPetition => handle_result(
            read_json(body).and_then(|req| api::classify_petition(classifier, &req)),
        ),
    }
}

fn in_session(
    route: SessionRoute<'_>,
    session: &mut Session,
    classifier: &dyn Classifier,
    body: &str,
) -> (u16, String) {
    use SessionRoute as S;

    match route {
        // Status and navigation
        S::Session => handle_result(api::get_session(session)),
        S::Page(label) => handle_result(api::show_page(session, label)),
        S::Navigate => handle_result(read_json(body).and_then(|req| api::navigate(session, &req))),
        S::NavigateNext => handle_result(api::navigate_next(session)),
        S::NavigateBack => handle_result(api::navigate_back(session)),

        // Citizens and petitions
        S::RegisterCitizen => {
            handle_result(read_json(body).and_then(|req| api::register_citizen(session, &req)))
        },
        S::ListPetitions => handle_result(api::list_petitions(session)),
        S::CreatePetition => handle_result(
            read_json(body).and_then(|req| api::create_petition(session, classifier, &req)),
        ),
        S::GetPetition(id) => handle_result(api::get_petition(session, id)),
        S::Upvote(id) => handle_result(api::upvote_petition(session, id)),
        S::Respond(id) => handle_result(
            read_json(body).and_then(|req| api::respond_to_petition(session, id, &req)),
        ),

        // Wizard
        S::SaveDraft => {
            handle_result(read_json(body).and_then(|req| api::save_draft(session, &req)))
        },
        S::AttachEvidence => {
            handle_result(read_json(body).and_then(|req| api::attach_evidence(session, &req)))
        },
        S::SetPrivacy => {
            handle_result(read_json(body).and_then(|req| api::set_privacy(session, &req)))
        },
        S::ReviewDraft => handle_result(api::review_draft(session)),
        S::SubmitDraft => handle_result(api::submit_draft(session, classifier)),

        // Reports and analytics
        S::ListReports => handle_result(api::list_reports(session)),
        S::CreateReport => handle_result(
            read_json(body).and_then(|req| api::create_report(session, classifier, &req)),
        ),
        S::Analytics => handle_result(api::get_analytics(session)),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Parse a JSON body; an empty body reads as `{}`
fn read_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> (u16, String) {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(&e),
    }
}

fn success_response<T: Serialize>(data: T) -> (u16, String) {
    match serde_json::to_string(&ApiResponse::success(data)) {
        Ok(body) => (200, body),
        Err(e) => error_response(&ApiError::internal(format!("Failed to encode response: {e}"))),
    }
}

fn error_response(error: &ApiError) -> (u16, String) {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    let body = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    (error.status_code(), body)
}

fn not_found(method: &Method, path: &str) -> (u16, String) {
    error_response(&ApiError::not_found(format!("API endpoint not found: {method} {path}")))
}
