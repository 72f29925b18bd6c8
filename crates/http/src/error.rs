//! Decoding of failed responses into the client error taxonomy

use bookclub_kernel::ClientError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body sent by the service on non-2xx responses: `{"error": "message"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Server-provided message if the body has the expected shape.
pub fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}

/// Map a rejected login/signup to [`ClientError::Auth`].
pub fn auth_failure(body: &[u8], default: &str) -> ClientError {
    ClientError::auth(server_message(body).unwrap_or_else(|| default.to_string()))
}

/// Map any other non-2xx response to [`ClientError::Request`].
pub fn request_failure(status: StatusCode, body: &[u8]) -> ClientError {
    let message = server_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });
    ClientError::request(status.as_u16(), message)
}

/// Map a transport failure to [`ClientError::Network`].
pub fn transport_failure(error: &reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::network("request timed out")
    } else {
        ClientError::network(error.to_string())
    }
}
