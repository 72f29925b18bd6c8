//! Book club client library
//!
//! Pages, form validation, and the book/review list view, wired to the
//! HTTP client and the persisted session by [`app::App`].

pub mod app;
pub mod forms;
pub mod pages;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
