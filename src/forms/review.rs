use bookclub_kernel::model::{Review, ReviewFields};
use bookclub_kernel::FieldErrors;

use super::{required, whole_number, WholeNumber};

const RATING: WholeNumber = WholeNumber {
    label: "Rating",
    min: 1,
    max: 5,
    min_message: "Rating must be at least 1",
    max_message: "Rating cannot be more than 5",
};

/// Add/edit review form. The target book is supplied by the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: String,
    pub comment: String,
}

impl ReviewForm {
    pub fn from_review(review: &Review) -> Self {
        Self {
            rating: review.rating.to_string(),
            comment: review.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<ReviewFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        let rating = whole_number(&mut errors, "rating", &self.rating, &RATING);
        let comment = required(&mut errors, "comment", &self.comment, "Comment is required");

        match (rating, comment) {
            (Some(rating), Some(comment)) => Ok(ReviewFields {
                rating: rating as u8,
                comment,
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
