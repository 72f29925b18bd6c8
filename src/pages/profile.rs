use async_trait::async_trait;
use bookclub_kernel::{Page, PageCtx, SessionError};

pub const PATH: &str = "/profile";

pub const SIGNED_OUT_MESSAGE: &str = "Please login";

/// Profile of the logged-in member, with logout
pub struct ProfilePage;

impl ProfilePage {
    /// Clear both persisted session fields.
    pub async fn logout(&self, ctx: &PageCtx<'_>) -> Result<(), SessionError> {
        ctx.session.teardown().await
    }
}

#[async_trait]
impl Page for ProfilePage {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn path(&self) -> &'static str {
        PATH
    }

    fn title(&self) -> &'static str {
        "Profile"
    }

    async fn render(&self, ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        let Some(user) = ctx.session.user().await else {
            return Ok(SIGNED_OUT_MESSAGE.to_string());
        };

        Ok([
            "Profile".to_string(),
            "=======".to_string(),
            format!("Username: {}", user.username),
            format!("Email: {}", user.email),
            "[logout]".to_string(),
        ]
        .join("\n"))
    }
}
