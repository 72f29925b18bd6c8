pub mod reviews;
pub mod view;

use async_trait::async_trait;
use bookclub_kernel::{Page, PageCtx};

pub use reviews::ReviewIndex;
pub use view::{BookFormState, BooksView, EntryMode, ListStatus, ReviewPanel, ViewError};

pub const PATH: &str = "/books";

/// Books page: the book list with reviews grouped under each book
pub struct BooksPage;

impl BooksPage {
    pub const fn new() -> Self {
        Self
    }

    /// Fresh view with both collections fetched
    pub async fn load(&self, ctx: &PageCtx<'_>) -> BooksView {
        let mut view = BooksView::new();
        view.refresh(ctx).await;
        view
    }
}

#[async_trait]
impl Page for BooksPage {
    fn name(&self) -> &'static str {
        "books"
    }

    fn path(&self) -> &'static str {
        PATH
    }

    fn title(&self) -> &'static str {
        "Books"
    }

    async fn render(&self, ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        let view = self.load(ctx).await;
        let session = ctx.session.current().await;
        Ok(view.render(&session))
    }
}

/// Create a new instance of the books page
pub fn create_page() -> std::sync::Arc<dyn Page> {
    std::sync::Arc::new(BooksPage::new())
}
