use std::sync::Arc;

use anyhow::{anyhow, Context};

use crate::page::{Navigation, Page, PageCtx};

/// Redirect chains longer than this are treated as a loop.
const MAX_REDIRECTS: usize = 4;

/// A static entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

/// Page registry backing the navigation shell
pub struct PageRegistry {
    brand: &'static str,
    pages: Vec<Arc<dyn Page>>,
}

impl PageRegistry {
    /// Create a new page registry
    pub fn new(brand: &'static str) -> Self {
        Self {
            brand,
            pages: Vec::new(),
        }
    }

    /// Register a page; link order follows registration order
    pub fn register(&mut self, page: Arc<dyn Page>) {
        self.pages.push(page);
    }

    /// Get a page by the path it is mounted at
    pub fn get(&self, path: &str) -> Option<&Arc<dyn Page>> {
        self.pages.iter().find(|page| page.path() == path)
    }

    /// Static link list for the navigation bar
    pub fn links(&self) -> Vec<NavLink> {
        self.pages
            .iter()
            .map(|page| NavLink {
                title: page.title(),
                path: page.path(),
            })
            .collect()
    }

    /// Render the navigation bar as a single line
    pub fn render_nav(&self) -> String {
        let links = self
            .links()
            .iter()
            .map(|link| format!("{} ({})", link.title, link.path))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("{} :: {}", self.brand, links)
    }

    /// Mount the page at `path`, following redirects, and render it
    pub async fn open(&self, path: &str, ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        let mut target = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let page = self
                .get(&target)
                .ok_or_else(|| anyhow!("no page is mounted at '{}'", target))?;

            tracing::debug!(page = page.name(), path = %target, "mounting page");

            match page
                .mount(ctx)
                .await
                .with_context(|| format!("failed to mount page '{}'", page.name()))?
            {
                Navigation::Stay => {
                    return page
                        .render(ctx)
                        .await
                        .with_context(|| format!("failed to render page '{}'", page.name()));
                }
                Navigation::Redirect(next) => {
                    tracing::info!(from = %target, to = next, "page redirected");
                    target = next.to_string();
                }
            }
        }

        Err(anyhow!("too many redirects starting at '{}'", path))
    }
}
