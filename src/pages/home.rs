use async_trait::async_trait;
use bookclub_kernel::{Page, PageCtx};

pub const PATH: &str = "/";

const FEATURES: &[(&str, &str)] = &[
    (
        "Browse Books",
        "Explore a wide collection of books added by our members.",
    ),
    (
        "Rate & Review",
        "Share your thoughts and rate the books you've read.",
    ),
    (
        "Connect",
        "Meet other book enthusiasts and discuss your favorite reads.",
    ),
];

/// Static landing page
pub struct HomePage;

#[async_trait]
impl Page for HomePage {
    fn name(&self) -> &'static str {
        "home"
    }

    fn path(&self) -> &'static str {
        PATH
    }

    fn title(&self) -> &'static str {
        "Home"
    }

    async fn render(&self, _ctx: &PageCtx<'_>) -> anyhow::Result<String> {
        let mut lines = vec![
            "Welcome to the Book Club!".to_string(),
            "Join our community of book lovers. Discover new books, share reviews, and connect with fellow readers.".to_string(),
        ];
        for (heading, blurb) in FEATURES {
            lines.push(String::new());
            lines.push((*heading).to_string());
            lines.push(format!("  {blurb}"));
        }
        Ok(lines.join("\n"))
    }
}
