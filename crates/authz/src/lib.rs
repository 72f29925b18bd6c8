//! Client-side ownership gate.
//!
//! Decides whether edit/delete controls are offered for a resource. The
//! service authorizes every mutation on its own; nothing here is a security
//! boundary.

use bookclub_kernel::model::{Book, Review, Session, UserId};

/// A resource that may belong to a member.
pub trait Owned {
    fn owner_id(&self) -> Option<UserId>;
}

impl Owned for Book {
    fn owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|user| user.id)
    }
}

impl Owned for Review {
    fn owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|user| user.id)
    }
}

/// True iff the session user owns `resource`.
///
/// Signed-out sessions and ownerless resources never qualify.
pub fn can_modify<R: Owned + ?Sized>(session: &Session, resource: &R) -> bool {
    let allowed = match (session.user_id(), resource.owner_id()) {
        (Some(user), Some(owner)) => user == owner,
        _ => false,
    };
    tracing::trace!(user = ?session.user_id(), owner = ?resource.owner_id(), allowed, "ownership gate");
    allowed
}
