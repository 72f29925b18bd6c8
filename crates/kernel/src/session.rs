//! Session provider: the explicit replacement for ambient local-storage reads.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::model::{AuthResponse, BearerToken, Session, User};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read session: {0}")]
    Read(String),

    #[error("failed to write session: {0}")]
    Write(String),

    #[error("failed to clear session: {0}")]
    Clear(String),
}

impl From<SessionError> for ClientError {
    fn from(error: SessionError) -> Self {
        ClientError::Session(error.to_string())
    }
}

/// Persisted key-value store holding the token and the cached user profile.
pub trait SessionStore: Send + Sync {
    /// Persist token and user together; readers never see one without the other.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Load the persisted session; absent fields when never saved or cleared.
    fn load(&self) -> Result<Session, SessionError>;

    /// Remove both fields.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session state shared by every page for the lifetime of the app.
///
/// Created once with [`SessionContext::init`], written at login/signup through
/// [`SessionContext::establish`], and torn down at logout.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Session>,
}

impl SessionContext {
    /// Load whatever session the store holds.
    pub fn init(store: Arc<dyn SessionStore>) -> Result<Self, SessionError> {
        let session = store.load()?;
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session context initialized"
        );
        Ok(Self {
            store,
            current: RwLock::new(session),
        })
    }

    pub async fn current(&self) -> Session {
        self.current.read().await.clone()
    }

    pub async fn token(&self) -> Option<BearerToken> {
        self.current.read().await.token.clone()
    }

    /// The token, or [`ClientError::Unauthenticated`] when signed out.
    pub async fn require_token(&self) -> Result<BearerToken, ClientError> {
        self.token().await.ok_or(ClientError::Unauthenticated)
    }

    pub async fn user(&self) -> Option<User> {
        self.current.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_authenticated()
    }

    /// Persist a fresh login and make it current.
    pub async fn establish(&self, auth: AuthResponse) -> Result<(), SessionError> {
        let session = Session::from(auth);
        let mut current = self.current.write().await;
        self.store.save(&session)?;
        tracing::info!(user_id = ?session.user_id(), "session established");
        *current = session;
        Ok(())
    }

    /// Clear the persisted session and forget the cached copy.
    pub async fn teardown(&self) -> Result<(), SessionError> {
        let mut current = self.current.write().await;
        self.store.clear()?;
        *current = Session::default();
        tracing::info!("session cleared");
        Ok(())
    }
}
