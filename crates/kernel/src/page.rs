use async_trait::async_trait;

use crate::api::BookClubApi;
use crate::session::SessionContext;

/// Context provided to pages when they are mounted
pub struct PageCtx<'a> {
    pub session: &'a SessionContext,
    pub api: &'a dyn BookClubApi,
}

/// Where the shell should go after a page action completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Stay on the current page
    Stay,
    /// Mount the page registered at this path
    Redirect(&'static str),
}

/// Core page trait that every screen of the client implements
#[async_trait]
pub trait Page: Sync + Send {
    /// Unique name for this page
    fn name(&self) -> &'static str;

    /// Path the navigation shell maps to this page
    fn path(&self) -> &'static str;

    /// Label used for the navigation link
    fn title(&self) -> &'static str;

    /// Called when the shell mounts the page, before rendering.
    /// A page may ask to be replaced by another one here.
    async fn mount(&self, _ctx: &PageCtx<'_>) -> anyhow::Result<Navigation> {
        Ok(Navigation::Stay)
    }

    /// Render the page as text
    async fn render(&self, ctx: &PageCtx<'_>) -> anyhow::Result<String>;
}
