//! Session registry
//!
//! Maps session ids to their state. The store is owned by the server loop
//! and handed to handlers by reference; there is no ambient global.
//! Sessions idle for longer than the store's time-to-live are dropped the
//! next time any session is resolved.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use super::Session;

/// Idle time after which a session is dropped, unless configured
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// All live sessions, keyed by id
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    ttl: TimeDelta,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    /// Create an empty store with the default time-to-live
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store dropping sessions idle for longer than `ttl`
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Return the session for `id`, creating a fresh one when the id is
    /// missing, unknown or expired
    ///
    /// Unknown ids are not adopted: the new session always gets a freshly
    /// generated UUID so clients cannot choose their own ids.
    pub fn resolve(&mut self, id: Option<&str>) -> &mut Session {
        self.resolve_at(id, Utc::now())
    }

    /// [`resolve`](Self::resolve) with an explicit clock
    pub fn resolve_at(&mut self, id: Option<&str>, now: DateTime<Utc>) -> &mut Session {
        self.evict_expired(now);

        let key = match id {
            Some(id) if self.sessions.contains_key(id) => id.to_string(),
            _ => {
                let id = Uuid::new_v4().to_string();
                log::debug!("Starting session {id}");
                id
            },
        };
        let session = self
            .sessions
            .entry(key)
            .or_insert_with_key(|k| Session::new(k.clone()));
        session.touch(now);
        session
    }

    /// Drop every session idle for longer than the time-to-live, returning
    /// how many were dropped
    pub fn evict_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired: Vec<String> = self
            .sessions
            .values()
            .filter(|s| now.signed_duration_since(s.last_seen()) > self.ttl)
            .map(|s| s.id().to_string())
            .collect();
        for id in &expired {
            self.end(id);
        }
        expired.len()
    }

    /// Look up an existing session
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Drop a session, returns true if it existed
    pub fn end(&mut self, id: &str) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            log::debug!("Ended session {id}");
        }
        removed
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session exists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
