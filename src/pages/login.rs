use async_trait::async_trait;
use bookclub_kernel::{ClientError, Navigation, Page, PageCtx};

use crate::forms::LoginForm;
use crate::pages::books;

pub const PATH: &str = "/login";

/// Login form; a successful login lands on the book list
pub struct LoginPage;

impl LoginPage {
    /// Validate, authenticate, and persist the session.
    ///
    /// Validation and authentication failures are returned for inline display;
    /// nothing is persisted unless the service accepted the credentials.
    pub async fn submit(
        &self,
        ctx: &PageCtx<'_>,
        form: &LoginForm,
    ) -> Result<Navigation, ClientError> {
        let credentials = form.validate().map_err(ClientError::Validation)?;
        let auth = ctx.api.login(&credentials).await?;
        tracing::info!(username = %auth.user.username, "logged in");
        ctx.session.establish(auth).await?;
        Ok(Navigation::Redirect(books::PATH))
    }
}

#[async_trait]
impl Page for LoginPage {
    fn name(&self) -> &'static str {
        "login"
    }

    fn path(&self) -> &'static str {
        PATH
    }

    fn title(&self) -> &'static str {
        "Login"
    }

    async fn render(&self, ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        let mut lines = vec!["Login".to_string(), "=====".to_string()];
        if let Some(user) = ctx.session.user().await {
            lines.push(format!("Logged in as {}.", user.username));
        }
        lines.push("Fields: username, password".to_string());
        Ok(lines.join("\n"))
    }
}
