//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//!
//! - [`router`] - Maps method and path to API handlers over [`AppState`]
//! - [`http`] - `tiny_http` request loop

pub mod http;
pub mod router;

pub use http::serve;
pub use router::{AppState, Reply, SESSION_HEADER};
pub use tiny_http::Method;
