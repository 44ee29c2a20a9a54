use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metrics::QUIZ_SESSIONS_ACTIVE;
use crate::models::quiz::QuizSession;

/// In-memory quiz session storage with TTL semantics. State is scoped to
/// one interactive session and discarded when it ends: expired entries are
/// treated as absent, purged lazily on access and by the periodic sweeper.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: QuizSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        QUIZ_SESSIONS_ACTIVE.set(sessions.len() as i64);
    }

    pub async fn get(&self, id: &str) -> Option<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let expired = sessions.get(id)?.is_expired(Utc::now());
        if expired {
            sessions.remove(id);
            QUIZ_SESSIONS_ACTIVE.set(sessions.len() as i64);
            return None;
        }
        sessions.get(id).cloned()
    }

    /// Applies `f` to the live session under the write lock. Returns None
    /// when the session is unknown or expired.
    pub async fn with_session_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut QuizSession) -> T,
    ) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        let expired = sessions.get(id)?.is_expired(Utc::now());
        if expired {
            sessions.remove(id);
            QUIZ_SESSIONS_ACTIVE.set(sessions.len() as i64);
            return None;
        }
        sessions.get_mut(id).map(f)
    }

    /// Drops every expired session; returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        QUIZ_SESSIONS_ACTIVE.set(sessions.len() as i64);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Background task evicting expired sessions once a minute.
pub fn spawn_expiry_sweeper(store: Arc<SessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::info!("Session sweeper evicted {} expired sessions", purged);
            }
        }
    });
}
