pub mod api;
pub mod error;
pub mod model;
pub mod page;
pub mod registry;
pub mod session;
pub mod settings;

pub use api::BookClubApi;
pub use error::{ClientError, FieldErrors};
pub use page::{Navigation, Page, PageCtx};
pub use registry::{NavLink, PageRegistry};
pub use session::{SessionContext, SessionError, SessionStore};
