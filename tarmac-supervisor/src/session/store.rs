//! Session store
//!
//! Process-wide map from user id to conversation history. All access goes
//! through a single lock with short critical sections, so concurrent chat
//! turns from different users cannot corrupt each other's history.
//!
//! Histories are append-only: entries are never mutated or removed within a
//! session. Whole sessions can be evicted when a capacity is configured;
//! the least recently active session goes first. The default is unbounded.

use std::collections::HashMap;
use std::sync::RwLock;

use tarmac_core::domain::session::{HistoryEntry, Role};

struct Session {
    entries: Vec<HistoryEntry>,
    last_active: chrono::DateTime<chrono::Utc>,
}

/// Thread-safe store of per-user conversation histories
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    max_sessions: Option<usize>,
}

impl SessionStore {
    /// Creates an unbounded store
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: None,
        }
    }

    /// Creates a store that keeps at most `max_sessions` live sessions,
    /// evicting the least recently active one when the cap is exceeded
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: Some(max_sessions),
        }
    }

    /// Returns the ordered history for a user (empty if unseen)
    pub fn history(&self, user_id: &str) -> Vec<HistoryEntry> {
        let sessions = self.sessions.read().unwrap();
        sessions
            .get(user_id)
            .map(|s| s.entries.clone())
            .unwrap_or_default()
    }

    /// Appends exactly one entry to a user's history
    pub fn append_turn(&self, user_id: &str, role: Role, content: &str) {
        let mut sessions = self.sessions.write().unwrap();
        Self::push(&mut sessions, user_id, vec![HistoryEntry::now(role, content)]);
        self.evict_over_capacity(&mut sessions, user_id);
    }

    /// Appends a user/assistant exchange as one atomic operation
    ///
    /// Both entries land under a single lock acquisition, so a concurrent
    /// reader can never observe the user turn without its reply.
    pub fn append_exchange(&self, user_id: &str, user_message: &str, assistant_reply: &str) {
        let mut sessions = self.sessions.write().unwrap();
        Self::push(
            &mut sessions,
            user_id,
            vec![
                HistoryEntry::now(Role::User, user_message),
                HistoryEntry::now(Role::Assistant, assistant_reply),
            ],
        );
        self.evict_over_capacity(&mut sessions, user_id);
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    fn push(sessions: &mut HashMap<String, Session>, user_id: &str, entries: Vec<HistoryEntry>) {
        let session = sessions.entry(user_id.to_string()).or_insert_with(|| Session {
            entries: Vec::new(),
            last_active: chrono::Utc::now(),
        });
        session.entries.extend(entries);
        session.last_active = chrono::Utc::now();
    }

    fn evict_over_capacity(&self, sessions: &mut HashMap<String, Session>, just_touched: &str) {
        let Some(max) = self.max_sessions else {
            return;
        };

        while sessions.len() > max {
            let oldest = sessions
                .iter()
                .filter(|(user_id, _)| user_id.as_str() != just_touched)
                .min_by_key(|(_, session)| session.last_active)
                .map(|(user_id, _)| user_id.clone());

            match oldest {
                Some(user_id) => {
                    tracing::debug!("Evicting idle session for user {}", user_id);
                    sessions.remove(&user_id);
                }
                None => break,
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
