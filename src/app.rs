//! Application bootstrap: settings in, a ready page context out.

use std::sync::Arc;

use anyhow::Context;
use bookclub_http::HttpApi;
use bookclub_kernel::settings::Settings;
use bookclub_kernel::{
    BookClubApi, Navigation, PageCtx, PageRegistry, SessionContext, SessionStore,
};
use bookclub_session::FileSessionStore;

use crate::pages;

/// Everything a page needs, owned for the lifetime of the process
pub struct App {
    session: SessionContext,
    api: Arc<dyn BookClubApi>,
    registry: PageRegistry,
}

impl App {
    /// Wire the file session store and the HTTP client from settings
    pub fn bootstrap(settings: &Settings) -> anyhow::Result<Self> {
        let store = Arc::new(FileSessionStore::new(settings.session.path.clone()));
        let api = Arc::new(HttpApi::new(&settings.api).context("failed to build API client")?);
        Self::with_parts(settings, store, api)
    }

    /// Wire explicit collaborators
    pub fn with_parts(
        settings: &Settings,
        store: Arc<dyn SessionStore>,
        api: Arc<dyn BookClubApi>,
    ) -> anyhow::Result<Self> {
        let session = SessionContext::init(store).context("failed to load persisted session")?;

        tracing::info!(
            env = ?settings.environment,
            api = %settings.api.base_url,
            "book club client ready"
        );

        Ok(Self {
            session,
            api,
            registry: pages::registry(),
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn ctx(&self) -> PageCtx<'_> {
        PageCtx {
            session: &self.session,
            api: self.api.as_ref(),
        }
    }

    /// Mount and render the page at `path`
    pub async fn open(&self, path: &str) -> anyhow::Result<String> {
        self.registry.open(path, &self.ctx()).await
    }

    /// Render whatever page a completed action points at
    pub async fn follow(&self, navigation: Navigation, current: &str) -> anyhow::Result<String> {
        match navigation {
            Navigation::Stay => self.open(current).await,
            Navigation::Redirect(path) => self.open(path).await,
        }
    }
}
