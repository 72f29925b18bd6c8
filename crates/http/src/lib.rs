//! HTTP client for the book club service, built on reqwest.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::{Timestamp, Uuid};

use bookclub_kernel::model::{
    AuthResponse, BearerToken, Book, BookFields, BookId, Credentials, NewReview, Review,
    ReviewFields, ReviewId, SignupProfile,
};
use bookclub_kernel::settings::ApiSettings;
use bookclub_kernel::{BookClubApi, ClientError};

pub mod endpoints;
pub mod error;

use endpoints::Endpoint;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const USER_AGENT_VALUE: &str = concat!("bookclub/", env!("CARGO_PKG_VERSION"));

const LOGIN_FAILED: &str = "Login failed";
const SIGNUP_FAILED: &str = "Signup failed";

/// [`BookClubApi`] over HTTP against a configured base URL
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client from the `[api]` settings section
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue one request and return the response once its status is known.
    /// Transport failures become [`ClientError::Network`]; the status is not
    /// inspected here. Protected endpoints without a token fail before any
    /// request is built, and public ones never carry the token.
    async fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        token: Option<&BearerToken>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError> {
        let token = match (endpoint.requires_auth(), token) {
            (true, None) => {
                tracing::warn!(operation = endpoint.name(), "refusing request without a token");
                return Err(ClientError::Unauthenticated);
            }
            (true, Some(token)) => Some(token),
            (false, _) => None,
        };

        let request_id = Uuid::new_v7(Timestamp::now(uuid::NoContext)).to_string();

        let mut request = self
            .client
            .request(endpoint.method(), self.url(endpoint))
            .header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(
            operation = endpoint.name(),
            method = %endpoint.method(),
            path = %endpoint.path(),
            request_id = %request_id,
            "sending request"
        );

        let response = request.send().await.map_err(|e| {
            tracing::warn!(
                operation = endpoint.name(),
                request_id = %request_id,
                error = %e,
                "request did not reach the service"
            );
            error::transport_failure(&e)
        })?;

        tracing::info!(
            operation = endpoint.name(),
            status_code = response.status().as_u16(),
            request_id = %request_id,
            "response received"
        );

        Ok(response)
    }

    /// Read the body of a failed response; an unreadable body counts as empty.
    async fn failure_body(response: reqwest::Response) -> Vec<u8> {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default()
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| error::transport_failure(&e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::request(status.as_u16(), format!("unexpected response body: {e}"))
        })
    }

    async fn authenticate<B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
        default_message: &str,
    ) -> Result<AuthResponse, ClientError> {
        let response = self.send(endpoint, None, Some(body)).await?;
        if !response.status().is_success() {
            let body = Self::failure_body(response).await;
            return Err(error::auth_failure(&body, default_message));
        }
        Self::decode(response).await
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        token: &BearerToken,
    ) -> Result<Vec<T>, ClientError> {
        let response = self.send::<()>(endpoint, Some(token), None).await?;
        let status = response.status();
        if !status.is_success() {
            let body = Self::failure_body(response).await;
            return Err(error::request_failure(status, &body));
        }
        Self::decode(response).await
    }

    /// Mutations only care about the status; any success body is discarded.
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        token: &BearerToken,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        let response = self.send(endpoint, Some(token), body).await?;
        let status = response.status();
        if !status.is_success() {
            let body = Self::failure_body(response).await;
            return Err(error::request_failure(status, &body));
        }
        Ok(())
    }
}

#[async_trait]
impl BookClubApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        self.authenticate(Endpoint::Login, credentials, LOGIN_FAILED)
            .await
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<AuthResponse, ClientError> {
        self.authenticate(Endpoint::Signup, profile, SIGNUP_FAILED)
            .await
    }

    async fn list_books(&self, token: &BearerToken) -> Result<Vec<Book>, ClientError> {
        self.fetch_list(Endpoint::ListBooks, token).await
    }

    async fn create_book(
        &self,
        token: &BearerToken,
        fields: &BookFields,
    ) -> Result<(), ClientError> {
        self.mutate(Endpoint::CreateBook, token, Some(fields)).await
    }

    async fn update_book(
        &self,
        token: &BearerToken,
        id: BookId,
        fields: &BookFields,
    ) -> Result<(), ClientError> {
        self.mutate(Endpoint::UpdateBook(id), token, Some(fields))
            .await
    }

    async fn delete_book(&self, token: &BearerToken, id: BookId) -> Result<(), ClientError> {
        self.mutate::<()>(Endpoint::DeleteBook(id), token, None)
            .await
    }

    async fn list_reviews(&self, token: &BearerToken) -> Result<Vec<Review>, ClientError> {
        self.fetch_list(Endpoint::ListReviews, token).await
    }

    async fn create_review(
        &self,
        token: &BearerToken,
        review: &NewReview,
    ) -> Result<(), ClientError> {
        self.mutate(Endpoint::CreateReview, token, Some(review))
            .await
    }

    async fn update_review(
        &self,
        token: &BearerToken,
        id: ReviewId,
        fields: &ReviewFields,
    ) -> Result<(), ClientError> {
        self.mutate(Endpoint::UpdateReview(id), token, Some(fields))
            .await
    }

    async fn delete_review(&self, token: &BearerToken, id: ReviewId) -> Result<(), ClientError> {
        self.mutate::<()>(Endpoint::DeleteReview(id), token, None)
            .await
    }
}
