//! Recording in-process stand-in for the remote service.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookclub_kernel::model::*;
use bookclub_kernel::{BookClubApi, ClientError, PageCtx, SessionContext};
use bookclub_session::MemorySessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(Credentials),
    Signup(SignupProfile),
    ListBooks,
    CreateBook(BookFields),
    UpdateBook(BookId, BookFields),
    DeleteBook(BookId),
    ListReviews,
    CreateReview(NewReview),
    UpdateReview(ReviewId, ReviewFields),
    DeleteReview(ReviewId),
}

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    books: Mutex<Vec<Book>>,
    reviews: Mutex<Vec<Review>>,
    auth: Mutex<Option<AuthResponse>>,
    failing: Mutex<HashSet<&'static str>>,
    offline: Mutex<bool>,
}

impl FakeApi {
    pub fn with_books(self, books: Vec<Book>) -> Self {
        *self.books.lock().unwrap() = books;
        self
    }

    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        *self.reviews.lock().unwrap() = reviews;
        self
    }

    pub fn with_auth(self, auth: AuthResponse) -> Self {
        *self.auth.lock().unwrap() = Some(auth);
        self
    }

    pub fn offline(self) -> Self {
        *self.offline.lock().unwrap() = true;
        self
    }

    /// Make the named operation answer with a 500.
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if *self.offline.lock().unwrap() {
            return Err(ClientError::network("connection refused"));
        }
        if self.failing.lock().unwrap().contains(operation) {
            return Err(ClientError::request(500, "Internal Server Error"));
        }
        Ok(())
    }
}

#[async_trait]
impl BookClubApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        self.record("login", Call::Login(credentials.clone()))?;
        self.auth
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::auth("Invalid credentials"))
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<AuthResponse, ClientError> {
        self.record("signup", Call::Signup(profile.clone()))?;
        self.auth
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::auth("Username already exists"))
    }

    async fn list_books(&self, _token: &BearerToken) -> Result<Vec<Book>, ClientError> {
        self.record("list_books", Call::ListBooks)?;
        Ok(self.books.lock().unwrap().clone())
    }

    async fn create_book(&self, _token: &BearerToken, fields: &BookFields) -> Result<(), ClientError> {
        self.record("create_book", Call::CreateBook(fields.clone()))
    }

    async fn update_book(
        &self,
        _token: &BearerToken,
        id: BookId,
        fields: &BookFields,
    ) -> Result<(), ClientError> {
        self.record("update_book", Call::UpdateBook(id, fields.clone()))
    }

    async fn delete_book(&self, _token: &BearerToken, id: BookId) -> Result<(), ClientError> {
        self.record("delete_book", Call::DeleteBook(id))?;
        self.books.lock().unwrap().retain(|book| book.id != id);
        Ok(())
    }

    async fn list_reviews(&self, _token: &BearerToken) -> Result<Vec<Review>, ClientError> {
        self.record("list_reviews", Call::ListReviews)?;
        Ok(self.reviews.lock().unwrap().clone())
    }

    async fn create_review(&self, _token: &BearerToken, review: &NewReview) -> Result<(), ClientError> {
        self.record("create_review", Call::CreateReview(review.clone()))
    }

    async fn update_review(
        &self,
        _token: &BearerToken,
        id: ReviewId,
        fields: &ReviewFields,
    ) -> Result<(), ClientError> {
        self.record("update_review", Call::UpdateReview(id, fields.clone()))
    }

    async fn delete_review(&self, _token: &BearerToken, id: ReviewId) -> Result<(), ClientError> {
        self.record("delete_review", Call::DeleteReview(id))?;
        self.reviews.lock().unwrap().retain(|review| review.id != id);
        Ok(())
    }
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        email: format!("{username}@x.com"),
    }
}

pub fn alice() -> User {
    User {
        id: UserId(1),
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
    }
}

pub fn book(id: i64, title: &str, owner: Option<User>) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        year_published: 1965,
        description: format!("About {title}"),
        owner,
    }
}

pub fn review(id: i64, book_id: i64, rating: i32, owner: Option<User>) -> Review {
    Review {
        id: ReviewId(id),
        book_id: BookId(book_id),
        rating,
        comment: format!("review {id}"),
        owner,
    }
}

pub fn signed_in(user: User) -> Session {
    Session::new(BearerToken::new("tok1"), user)
}

/// Session provider and fake service wired together.
pub struct Harness {
    pub store: MemorySessionStore,
    pub session: SessionContext,
    pub api: Arc<FakeApi>,
}

impl Harness {
    pub fn new(session: Session, api: FakeApi) -> Self {
        let store = MemorySessionStore::with_session(session);
        let context = SessionContext::init(Arc::new(store.clone())).unwrap();
        Self {
            store,
            session: context,
            api: Arc::new(api),
        }
    }

    pub fn ctx(&self) -> PageCtx<'_> {
        PageCtx {
            session: &self.session,
            api: self.api.as_ref(),
        }
    }
}
