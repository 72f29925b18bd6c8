pub mod books;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;

use std::sync::Arc;

use bookclub_kernel::PageRegistry;

pub use books::BooksPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;

/// Brand shown at the left of the navigation bar
pub const BRAND: &str = "Book Club";

/// Register every page; the order is the order of the navigation links
pub fn register_all(registry: &mut PageRegistry) {
    registry.register(Arc::new(HomePage));
    registry.register(books::create_page());
    registry.register(Arc::new(LoginPage));
    registry.register(Arc::new(SignupPage));
    registry.register(Arc::new(ProfilePage));
}

/// Registry holding all pages of the client
pub fn registry() -> PageRegistry {
    let mut registry = PageRegistry::new(BRAND);
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{alice, book, signed_in, FakeApi, Harness};
    use bookclub_kernel::model::Session;

    #[test]
    fn navigation_links_are_static() {
        let paths: Vec<_> = registry().links().iter().map(|link| link.path).collect();
        assert_eq!(paths, vec!["/", "/books", "/login", "/signup", "/profile"]);
        assert!(registry().render_nav().starts_with("Book Club :: Home (/)"));
    }

    #[tokio::test]
    async fn signup_redirects_to_books_when_logged_in() {
        let api = FakeApi::default().with_books(vec![book(7, "Dune", Some(alice()))]);
        let harness = Harness::new(signed_in(alice()), api);

        let page = registry().open("/signup", &harness.ctx()).await.unwrap();
        assert!(page.starts_with("Books"));
        assert!(page.contains("#7 Dune"));
    }

    #[tokio::test]
    async fn profile_asks_signed_out_visitors_to_login() {
        let harness = Harness::new(Session::default(), FakeApi::default());
        let page = registry().open("/profile", &harness.ctx()).await.unwrap();
        assert_eq!(page, "Please login");
    }
}
