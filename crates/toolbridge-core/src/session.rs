//! In-memory session service
//!
//! Tracks conversation sessions for the runner. State is an empty map today;
//! it exists so a session can carry values between exchanges later without
//! changing the runner surface.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// A single conversation session
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub app_name: String,
    pub user_id: String,
    pub state: HashMap<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Session store backed by process memory
#[derive(Default)]
pub struct InMemorySessionService {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with an empty state map and return it.
    pub fn create_session(&self, app_name: impl Into<String>, user_id: impl Into<String>) -> Session {
        let session = Session {
            id: Uuid::new_v4().to_string(),
            app_name: app_name.into(),
            user_id: user_id.into(),
            state: HashMap::new(),
            created_at: Utc::now(),
        };
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .insert(session.id.clone(), session.clone());
        session
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_round_trips() {
        let service = InMemorySessionService::new();
        let session = service.create_session("flight_search_app", "user_flights");

        let fetched = service.get(&session.id).expect("session should exist");
        assert_eq!(fetched.app_name, "flight_search_app");
        assert_eq!(fetched.user_id, "user_flights");
        assert!(fetched.state.is_empty());
    }

    #[test]
    fn unknown_id_yields_none() {
        let service = InMemorySessionService::new();
        assert!(service.get("no-such-session").is_none());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let service = InMemorySessionService::new();
        let a = service.create_session("app", "user");
        let b = service.create_session("app", "user");
        assert_ne!(a.id, b.id);
    }
}
