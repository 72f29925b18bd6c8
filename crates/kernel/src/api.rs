use async_trait::async_trait;

use crate::error::ClientError;
use crate::model::{
    AuthResponse, BearerToken, Book, BookFields, BookId, Credentials, NewReview, Review,
    ReviewFields, ReviewId, SignupProfile,
};

/// One method per remote operation; each is a single request/response cycle.
///
/// Authenticated operations take the bearer token explicitly so callers must
/// hold a session to reach them.
#[async_trait]
pub trait BookClubApi: Send + Sync {
    /// `POST /login`. A rejected login is a [`ClientError::Auth`].
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError>;

    /// `POST /signup`. A rejected signup is a [`ClientError::Auth`].
    async fn signup(&self, profile: &SignupProfile) -> Result<AuthResponse, ClientError>;

    /// `GET /books`
    async fn list_books(&self, token: &BearerToken) -> Result<Vec<Book>, ClientError>;

    /// `POST /books`
    async fn create_book(&self, token: &BearerToken, fields: &BookFields)
        -> Result<(), ClientError>;

    /// `PATCH /books/{id}`
    async fn update_book(
        &self,
        token: &BearerToken,
        id: BookId,
        fields: &BookFields,
    ) -> Result<(), ClientError>;

    /// `DELETE /books/{id}`
    async fn delete_book(&self, token: &BearerToken, id: BookId) -> Result<(), ClientError>;

    /// `GET /reviews`
    async fn list_reviews(&self, token: &BearerToken) -> Result<Vec<Review>, ClientError>;

    /// `POST /reviews`
    async fn create_review(&self, token: &BearerToken, review: &NewReview)
        -> Result<(), ClientError>;

    /// `PATCH /reviews/{id}`
    async fn update_review(
        &self,
        token: &BearerToken,
        id: ReviewId,
        fields: &ReviewFields,
    ) -> Result<(), ClientError>;

    /// `DELETE /reviews/{id}`
    async fn delete_review(&self, token: &BearerToken, id: ReviewId) -> Result<(), ClientError>;
}
