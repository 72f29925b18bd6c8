//! Route table of the book club service

use bookclub_kernel::model::{BookId, ReviewId};
use reqwest::Method;

/// Every remote operation the client performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    ListBooks,
    CreateBook,
    UpdateBook(BookId),
    DeleteBook(BookId),
    ListReviews,
    CreateReview,
    UpdateReview(ReviewId),
    DeleteReview(ReviewId),
}

impl Endpoint {
    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ListBooks => "list_books",
            Self::CreateBook => "create_book",
            Self::UpdateBook(_) => "update_book",
            Self::DeleteBook(_) => "delete_book",
            Self::ListReviews => "list_reviews",
            Self::CreateReview => "create_review",
            Self::UpdateReview(_) => "update_review",
            Self::DeleteReview(_) => "delete_review",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::ListBooks | Self::ListReviews => Method::GET,
            Self::Login | Self::Signup | Self::CreateBook | Self::CreateReview => Method::POST,
            Self::UpdateBook(_) | Self::UpdateReview(_) => Method::PATCH,
            Self::DeleteBook(_) | Self::DeleteReview(_) => Method::DELETE,
        }
    }

    /// Path relative to the configured base URL
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::ListBooks | Self::CreateBook => "/books".to_string(),
            Self::UpdateBook(id) | Self::DeleteBook(id) => format!("/books/{id}"),
            Self::ListReviews | Self::CreateReview => "/reviews".to_string(),
            Self::UpdateReview(id) | Self::DeleteReview(id) => format!("/reviews/{id}"),
        }
    }

    /// Whether the bearer token must accompany the request
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }
}
