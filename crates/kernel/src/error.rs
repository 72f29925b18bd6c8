//! Error taxonomy shared by the API client, the session layer, and the pages.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Shown when the service could not be reached at all.
pub const CONNECT_FAILED_MESSAGE: &str = "Could not connect to the server.";

/// One message per invalid form field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message recorded for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when no field failed, otherwise a validation error.
    pub fn into_result(self) -> Result<(), ClientError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Failure of a single client interaction. None of these are fatal to the process.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("not logged in")]
    Unauthenticated,

    #[error("session store error: {0}")]
    Session(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a request error for a reachable service that refused the call
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Text suitable for showing next to a form or in an alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Auth { message } | Self::Request { message, .. } => message.clone(),
            Self::Network { .. } => CONNECT_FAILED_MESSAGE.to_string(),
            Self::Unauthenticated => "Please login".to_string(),
            Self::Session(_) | Self::Internal(_) => "An unexpected error occurred.".to_string(),
        }
    }
}
