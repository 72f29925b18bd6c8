use std::collections::BTreeMap;

use bookclub_kernel::model::{BookId, Review, ReviewId};

/// Reviews grouped by the book they belong to, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewIndex {
    by_book: BTreeMap<BookId, Vec<Review>>,
}

impl ReviewIndex {
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut by_book: BTreeMap<BookId, Vec<Review>> = BTreeMap::new();
        for review in reviews {
            by_book.entry(review.book_id).or_default().push(review);
        }
        Self { by_book }
    }

    pub fn for_book(&self, book_id: BookId) -> &[Review] {
        self.by_book.get(&book_id).map_or(&[], Vec::as_slice)
    }

    pub fn find(&self, review_id: ReviewId) -> Option<&Review> {
        self.by_book
            .values()
            .flatten()
            .find(|review| review.id == review_id)
    }

    pub fn len(&self) -> usize {
        self.by_book.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_book.is_empty()
    }
}
