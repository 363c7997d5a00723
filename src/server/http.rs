//! `tiny_http` request loop
//!
//! Reads each request to completion, hands it to [`AppState`] and writes the
//! reply. Requests are served one at a time.

use std::io::{Cursor, Read as _};

use tiny_http::{Header, Request, Response, Server, StatusCode};

use super::router::{AppState, Reply, SESSION_HEADER};
use crate::api::ApiError;

/// Serve the API on `addr` until the process exits
pub fn serve(addr: &str, state: &mut AppState) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    log::info!("Listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let response = handle_request(state, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

/// Route a single `tiny_http` request
pub fn handle_request(state: &mut AppState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let session_id = request
        .headers()
        .iter()
        .find(|h| h.field.equiv(SESSION_HEADER))
        .map(|h| h.value.as_str().trim().to_string());

    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => {
            let method = request.method().clone();
            let url = request.url().to_string();
            state.handle(&method, &url, session_id.as_deref(), &body)
        },
        Err(e) => state.reject(
            session_id.as_deref(),
            &ApiError::bad_request(format!("Failed to read request body: {e}")),
        ),
    };
    to_response(reply)
}

fn to_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let session = reply
        .session_id
        .as_deref()
        .map(|id| Header::from_bytes(SESSION_HEADER, id.as_bytes()));
    let headers = [Some(Header::from_bytes("Content-Type", "application/json")), session];

    let mut response = Response::from_string(reply.body).with_status_code(StatusCode(reply.status));
    for header in headers.into_iter().flatten().flatten() {
        response.add_header(header);
    }
    response
}
