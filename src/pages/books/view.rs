//! In-memory book and review collections plus the local UI state around them.
//!
//! Every successful mutation re-fetches the affected collection in full; the
//! view never patches its lists in place.

use std::collections::BTreeMap;

use bookclub_authz::can_modify;
use bookclub_kernel::model::{Book, BookId, NewReview, ReviewId, Session};
use bookclub_kernel::{ClientError, FieldErrors, PageCtx};
use thiserror::Error;

use super::reviews::ReviewIndex;
use crate::forms::{BookForm, ReviewForm};

pub const SAVE_BOOK_FAILED: &str = "Failed to save book";
pub const DELETE_BOOK_FAILED: &str = "Failed to delete book";
pub const SAVE_REVIEW_FAILED: &str = "Failed to save review";
pub const DELETE_REVIEW_FAILED: &str = "Failed to delete review";

/// Outcome of the last fetch of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    NotLoaded,
    /// No token, so nothing was requested.
    SignedOut,
    Loaded,
    Failed(String),
}

/// The single add/edit book form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookFormState {
    #[default]
    Closed,
    Creating,
    Editing(BookId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Viewing,
    Editing,
}

/// Review area of one book entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewPanel {
    #[default]
    Collapsed,
    Adding,
    Editing(ReviewId),
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid input: {0}")]
    Invalid(FieldErrors),

    /// Mutation failure; shown to the user as a blocking notification.
    #[error("{message}")]
    Alert {
        message: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("only the owner can change this {0}")]
    NotOwner(&'static str),

    #[error("book {0} is not in the list")]
    UnknownBook(BookId),

    #[error("review {0} is not in the list")]
    UnknownReview(ReviewId),

    #[error("no {0} form is open")]
    NoOpenForm(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),
}

fn alert(message: &'static str, source: ClientError) -> ViewError {
    tracing::warn!(error = %source, "{}", message);
    ViewError::Alert { message, source }
}

#[derive(Debug, Default)]
pub struct BooksView {
    books: Vec<Book>,
    reviews: ReviewIndex,
    books_status: ListStatus,
    reviews_status: ListStatus,
    book_form: BookFormState,
    review_panels: BTreeMap<BookId, ReviewPanel>,
}

impl BooksView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn reviews(&self) -> &ReviewIndex {
        &self.reviews
    }

    pub fn books_status(&self) -> &ListStatus {
        &self.books_status
    }

    pub fn reviews_status(&self) -> &ListStatus {
        &self.reviews_status
    }

    pub fn book_form(&self) -> BookFormState {
        self.book_form
    }

    pub fn entry_mode(&self, id: BookId) -> EntryMode {
        if self.book_form == BookFormState::Editing(id) {
            EntryMode::Editing
        } else {
            EntryMode::Viewing
        }
    }

    pub fn review_panel(&self, book_id: BookId) -> ReviewPanel {
        self.review_panels
            .get(&book_id)
            .copied()
            .unwrap_or_default()
    }

    /// Fetch both collections.
    pub async fn refresh(&mut self, ctx: &PageCtx<'_>) {
        self.refresh_books(ctx).await;
        self.refresh_reviews(ctx).await;
    }

    pub async fn refresh_books(&mut self, ctx: &PageCtx<'_>) {
        let Some(token) = ctx.session.token().await else {
            self.books.clear();
            self.books_status = ListStatus::SignedOut;
            return;
        };

        match ctx.api.list_books(&token).await {
            Ok(books) => {
                tracing::debug!(count = books.len(), "books loaded");
                self.books = books;
                self.books_status = ListStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load books");
                self.books.clear();
                self.books_status = ListStatus::Failed(e.user_message());
            }
        }
    }

    pub async fn refresh_reviews(&mut self, ctx: &PageCtx<'_>) {
        let Some(token) = ctx.session.token().await else {
            self.reviews = ReviewIndex::default();
            self.reviews_status = ListStatus::SignedOut;
            return;
        };

        match ctx.api.list_reviews(&token).await {
            Ok(reviews) => {
                tracing::debug!(count = reviews.len(), "reviews loaded");
                self.reviews = ReviewIndex::from_reviews(reviews);
                self.reviews_status = ListStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load reviews");
                self.reviews = ReviewIndex::default();
                self.reviews_status = ListStatus::Failed(e.user_message());
            }
        }
    }

    pub fn open_book_form(&mut self) {
        self.book_form = BookFormState::Creating;
    }

    pub fn cancel_book_form(&mut self) {
        self.book_form = BookFormState::Closed;
    }

    /// Switch a book entry to editing and return the prefilled form.
    pub fn begin_edit(&mut self, session: &Session, id: BookId) -> Result<BookForm, ViewError> {
        let book = self.book(id).ok_or(ViewError::UnknownBook(id))?;
        if !can_modify(session, book) {
            return Err(ViewError::NotOwner("book"));
        }
        let form = BookForm::from_book(book);
        self.book_form = BookFormState::Editing(id);
        Ok(form)
    }

    pub fn cancel_edit(&mut self, id: BookId) {
        if self.book_form == BookFormState::Editing(id) {
            self.book_form = BookFormState::Closed;
        }
    }

    /// Validate and send the open book form, then reload the books.
    pub async fn submit_book(
        &mut self,
        ctx: &PageCtx<'_>,
        form: &BookForm,
    ) -> Result<(), ViewError> {
        if self.book_form == BookFormState::Closed {
            return Err(ViewError::NoOpenForm("book"));
        }
        let fields = form.validate().map_err(ViewError::Invalid)?;
        let token = ctx.session.require_token().await?;

        let result = match self.book_form {
            BookFormState::Closed => return Err(ViewError::NoOpenForm("book")),
            BookFormState::Creating => ctx.api.create_book(&token, &fields).await,
            BookFormState::Editing(id) => ctx.api.update_book(&token, id, &fields).await,
        };
        result.map_err(|source| alert(SAVE_BOOK_FAILED, source))?;

        tracing::info!(form = ?self.book_form, "book saved");
        self.book_form = BookFormState::Closed;
        self.refresh_books(ctx).await;
        Ok(())
    }

    pub async fn delete_book(&mut self, ctx: &PageCtx<'_>, id: BookId) -> Result<(), ViewError> {
        let session = ctx.session.current().await;
        let book = self.book(id).ok_or(ViewError::UnknownBook(id))?;
        if !can_modify(&session, book) {
            return Err(ViewError::NotOwner("book"));
        }
        let token = session.token.ok_or(ClientError::Unauthenticated)?;

        ctx.api
            .delete_book(&token, id)
            .await
            .map_err(|source| alert(DELETE_BOOK_FAILED, source))?;

        tracing::info!(book_id = %id, "book deleted");
        self.cancel_edit(id);
        self.review_panels.remove(&id);
        self.refresh_books(ctx).await;
        Ok(())
    }

    pub fn open_review_form(&mut self, book_id: BookId) -> Result<(), ViewError> {
        if self.book(book_id).is_none() {
            return Err(ViewError::UnknownBook(book_id));
        }
        self.review_panels.insert(book_id, ReviewPanel::Adding);
        Ok(())
    }

    /// Open the review form of the review's book prefilled for editing.
    pub fn begin_review_edit(
        &mut self,
        session: &Session,
        id: ReviewId,
    ) -> Result<ReviewForm, ViewError> {
        let review = self.reviews.find(id).ok_or(ViewError::UnknownReview(id))?;
        if !can_modify(session, review) {
            return Err(ViewError::NotOwner("review"));
        }
        let form = ReviewForm::from_review(review);
        self.review_panels
            .insert(review.book_id, ReviewPanel::Editing(id));
        Ok(form)
    }

    pub fn cancel_review_form(&mut self, book_id: BookId) {
        self.review_panels.remove(&book_id);
    }

    /// Validate and send the review form open on `book_id`, then reload the reviews.
    pub async fn submit_review(
        &mut self,
        ctx: &PageCtx<'_>,
        book_id: BookId,
        form: &ReviewForm,
    ) -> Result<(), ViewError> {
        let panel = self.review_panel(book_id);
        if panel == ReviewPanel::Collapsed {
            return Err(ViewError::NoOpenForm("review"));
        }
        let fields = form.validate().map_err(ViewError::Invalid)?;
        let token = ctx.session.require_token().await?;

        let result = match panel {
            ReviewPanel::Collapsed => return Err(ViewError::NoOpenForm("review")),
            ReviewPanel::Adding => {
                ctx.api
                    .create_review(&token, &NewReview { fields, book_id })
                    .await
            }
            ReviewPanel::Editing(id) => ctx.api.update_review(&token, id, &fields).await,
        };
        result.map_err(|source| alert(SAVE_REVIEW_FAILED, source))?;

        tracing::info!(book_id = %book_id, panel = ?panel, "review saved");
        self.review_panels.remove(&book_id);
        self.refresh_reviews(ctx).await;
        Ok(())
    }

    pub async fn delete_review(
        &mut self,
        ctx: &PageCtx<'_>,
        id: ReviewId,
    ) -> Result<(), ViewError> {
        let session = ctx.session.current().await;
        let review = self.reviews.find(id).ok_or(ViewError::UnknownReview(id))?;
        if !can_modify(&session, review) {
            return Err(ViewError::NotOwner("review"));
        }
        let book_id = review.book_id;
        let token = session.token.ok_or(ClientError::Unauthenticated)?;

        ctx.api
            .delete_review(&token, id)
            .await
            .map_err(|source| alert(DELETE_REVIEW_FAILED, source))?;

        tracing::info!(review_id = %id, "review deleted");
        if self.review_panel(book_id) == ReviewPanel::Editing(id) {
            self.review_panels.remove(&book_id);
        }
        self.refresh_reviews(ctx).await;
        Ok(())
    }

    /// Render the list. Edit/delete controls appear only on the session user's own resources.
    pub fn render(&self, session: &Session) -> String {
        let mut lines = vec!["Books".to_string(), "=====".to_string()];

        match self.book_form {
            BookFormState::Creating => lines.push("New book form open [cancel]".to_string()),
            _ => lines.push("[add book]".to_string()),
        }

        match &self.books_status {
            ListStatus::SignedOut => lines.push("Please login to see books.".to_string()),
            ListStatus::Failed(reason) => lines.push(format!("Could not load books: {reason}")),
            ListStatus::Loaded if self.books.is_empty() => lines.push("No books yet.".to_string()),
            _ => {}
        }
        if let ListStatus::Failed(reason) = &self.reviews_status {
            lines.push(format!("Could not load reviews: {reason}"));
        }

        for book in &self.books {
            lines.push(String::new());
            lines.push(format!("#{} {}", book.id, book.title));
            lines.push(format!("   Author: {}", book.author));
            lines.push(format!("   Year: {}", book.year_published));
            lines.push(format!("   {}", book.description));
            if can_modify(session, book) {
                lines.push(format!("   [edit book {0}] [delete book {0}]", book.id));
            }
            if self.entry_mode(book.id) == EntryMode::Editing {
                lines.push("   (editing) [cancel]".to_string());
            }

            lines.push("   Reviews".to_string());
            for review in self.reviews.for_book(book.id) {
                let author = review
                    .owner
                    .as_ref()
                    .map_or("unknown", |user| user.username.as_str());
                lines.push(format!("     #{} Rating: {}/5", review.id, review.rating));
                lines.push(format!("        {}", review.comment));
                lines.push(format!("        By: {author}"));
                if can_modify(session, review) {
                    lines.push(format!(
                        "        [edit review {0}] [delete review {0}]",
                        review.id
                    ));
                }
            }

            match self.review_panel(book.id) {
                ReviewPanel::Collapsed => lines.push(format!("     [add review {}]", book.id)),
                ReviewPanel::Adding => lines.push("     New review form open [cancel]".to_string()),
                ReviewPanel::Editing(id) => {
                    lines.push(format!("     Editing review {id} [cancel]"))
                }
            }
        }

        lines.join("\n")
    }
}
