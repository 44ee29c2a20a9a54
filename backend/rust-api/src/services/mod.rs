use std::sync::Arc;

use crate::config::Config;
use session_store::SessionStore;

pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

pub mod quiz_service;
pub mod session_store;
