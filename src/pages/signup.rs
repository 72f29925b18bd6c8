use async_trait::async_trait;
use bookclub_kernel::{ClientError, Navigation, Page, PageCtx};

use crate::forms::SignupForm;
use crate::pages::books;

pub const PATH: &str = "/signup";

/// Signup form; members who are already logged in are sent to the book list
pub struct SignupPage;

impl SignupPage {
    pub async fn submit(
        &self,
        ctx: &PageCtx<'_>,
        form: &SignupForm,
    ) -> Result<Navigation, ClientError> {
        let profile = form.validate().map_err(ClientError::Validation)?;
        let auth = ctx.api.signup(&profile).await?;
        tracing::info!(username = %auth.user.username, "signed up");
        ctx.session.establish(auth).await?;
        Ok(Navigation::Redirect(books::PATH))
    }
}

#[async_trait]
impl Page for SignupPage {
    fn name(&self) -> &'static str {
        "signup"
    }

    fn path(&self) -> &'static str {
        PATH
    }

    fn title(&self) -> &'static str {
        "Signup"
    }

    async fn mount(&self, ctx: &PageCtx<'_>) -> anyhow::Result<Navigation> {
        if ctx.session.is_authenticated().await {
            return Ok(Navigation::Redirect(books::PATH));
        }
        Ok(Navigation::Stay)
    }

    async fn render(&self, _ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        Ok(["Signup", "======", "Fields: username, email, password"].join("\n"))
    }
}
