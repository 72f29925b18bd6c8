use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Server-assigned user identifier.
    UserId
);
id_type!(
    /// Server-assigned book identifier.
    BookId
);
id_type!(
    /// Server-assigned review identifier.
    ReviewId
);

/// A registered member as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
}

/// A book in the shared catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year of first publication
    pub year_published: i32,
    /// Free-form description
    pub description: String,
    /// Member who added the book; the service sends `null` for orphans
    #[serde(rename = "user", default)]
    pub owner: Option<User>,
}

/// A rating and comment left on a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review
    pub id: ReviewId,
    /// Book the review is attached to
    pub book_id: BookId,
    /// Rating as stored by the service; only submissions are held to 1..=5
    pub rating: i32,
    /// Free-form comment
    pub comment: String,
    /// Member who wrote the review
    #[serde(rename = "user", default)]
    pub owner: Option<User>,
}

/// Request body for creating or updating a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year_published: i32,
    pub description: String,
}

/// Request body for updating a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFields {
    pub rating: u8,
    pub comment: String,
}

/// Request body for creating a review; the target book travels with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    #[serde(flatten)]
    pub fields: ReviewFields,
    pub book_id: BookId,
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupProfile {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login or signup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: BearerToken,
    pub user: User,
}

/// Opaque credential issued at login/signup.
///
/// `Debug` and `Display` never print the value so tokens stay out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// The locally persisted login state.
///
/// `token` present iff the user is treated as authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<BearerToken>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: BearerToken, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|user| user.id)
    }
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self::new(auth.access_token, auth.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_owner_reads_user_field() {
        let book: Book = serde_json::from_value(json!({
            "id": 7,
            "title": "Dune",
            "author": "Frank Herbert",
            "year_published": 1965,
            "description": "Spice",
            "user": {"id": 1, "username": "alice", "email": "a@x.com"}
        }))
        .unwrap();

        assert_eq!(book.id, BookId(7));
        assert_eq!(book.owner.unwrap().id, UserId(1));
    }

    #[test]
    fn null_owner_is_absent() {
        let review: Review = serde_json::from_value(json!({
            "id": 3,
            "book_id": 7,
            "rating": 4,
            "comment": "good",
            "user": null
        }))
        .unwrap();

        assert!(review.owner.is_none());
    }

    #[test]
    fn stored_ratings_outside_form_range_still_parse() {
        let reviews: Vec<Review> = serde_json::from_value(json!([
            {"id": 1, "book_id": 7, "rating": 4, "comment": "good", "user": null},
            {"id": 2, "book_id": 7, "rating": 300, "comment": "legacy", "user": null},
            {"id": 3, "book_id": 7, "rating": -1, "comment": "odd", "user": null}
        ]))
        .unwrap();

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[1].rating, 300);
        assert_eq!(reviews[2].rating, -1);
    }

    #[test]
    fn new_review_flattens_book_id_into_payload() {
        let body = NewReview {
            fields: ReviewFields {
                rating: 3,
                comment: "ok".to_string(),
            },
            book_id: BookId(7),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"rating": 3, "comment": "ok", "book_id": 7})
        );
    }

    #[test]
    fn bearer_token_is_redacted() {
        let token = BearerToken::new("tok1");
        assert_eq!(format!("{token:?}"), "BearerToken([REDACTED])");
        assert_eq!(token.to_string(), "[REDACTED]");
        assert_eq!(token.expose(), "tok1");
    }
}
