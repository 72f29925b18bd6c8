//! In-memory session storage.

use std::sync::{Arc, RwLock};

use bookclub_kernel::model::Session;
use bookclub_kernel::{SessionError, SessionStore};

/// Session store that lives only as long as the process.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    session: Arc<RwLock<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self
            .session
            .write()
            .map_err(|_| SessionError::Write("lock poisoned".to_owned()))? = session.clone();
        Ok(())
    }

    fn load(&self) -> Result<Session, SessionError> {
        self.session
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SessionError::Read("lock poisoned".to_owned()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self
            .session
            .write()
            .map_err(|_| SessionError::Clear("lock poisoned".to_owned()))? = Session::default();
        Ok(())
    }
}
