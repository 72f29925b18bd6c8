use bookclub_kernel::model::{Book, BookFields};
use bookclub_kernel::FieldErrors;

use super::{current_year, required, whole_number, WholeNumber};

const EARLIEST_YEAR: i64 = 1000;

/// Add/edit book form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year_published: String,
    pub description: String,
}

impl BookForm {
    /// Prefill the form with an existing book for editing.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year_published: book.year_published.to_string(),
            description: book.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<BookFields, FieldErrors> {
        self.validate_at(current_year())
    }

    /// Validate against an explicit current year.
    pub fn validate_at(&self, current_year: i32) -> Result<BookFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required(&mut errors, "title", &self.title, "Title is required");
        let author = required(&mut errors, "author", &self.author, "Author is required");
        let year = whole_number(
            &mut errors,
            "year_published",
            &self.year_published,
            &WholeNumber {
                label: "Year",
                min: EARLIEST_YEAR,
                max: i64::from(current_year),
                min_message: "Year must be at least 1000",
                max_message: "Year cannot be in the future",
            },
        );
        let description = required(
            &mut errors,
            "description",
            &self.description,
            "Description is required",
        );

        match (title, author, year, description) {
            (Some(title), Some(author), Some(year), Some(description)) => Ok(BookFields {
                title,
                author,
                // bounded by `current_year`, so it fits
                year_published: year as i32,
                description,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_field(&self, field: &str) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| errors.get(field).map(str::to_string))
    }
}
