//! Per-request authentication context and the authorization guards.
//!
//! The transport layer resolves whatever credential a request carries into an
//! [`AuthContext`] and threads it into each handler as a plain value. A
//! missing or invalid token is not an error at resolution time; operations
//! that need a caller reject later through [`AuthContext::require_authenticated`].

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;

/// Immutable authentication state derived from an inbound credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthContext {
    user_id: Option<Uuid>,
}

impl AuthContext {
    /// Context for a request with no usable credential.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Context for a request whose token passed signature and expiry checks.
    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// The authorization gate: every mutation and identity-scoped query calls
    /// this before validation and before touching a repository.
    pub fn require_authenticated(&self) -> Result<Uuid, DomainError> {
        self.user_id.ok_or(DomainError::Unauthenticated)
    }
}

/// The ownership gate for mutations on an existing post.
///
/// Only reached after the post was loaded; a missing post fails `NotFound`
/// at the repository lookup instead.
pub fn require_owner(post: &Post, caller: Uuid) -> Result<(), DomainError> {
    if post.creator == caller {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_context_is_rejected() {
        let ctx = AuthContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert!(matches!(
            ctx.require_authenticated(),
            Err(DomainError::Unauthenticated)
        ));
    }

    #[test]
    fn authenticated_context_yields_caller_id() {
        let id = Uuid::new_v4();
        let ctx = AuthContext::authenticated(id);
        assert_eq!(ctx.require_authenticated().unwrap(), id);
    }

    #[test]
    fn owner_passes_non_owner_fails() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, "Title".into(), "Content here".into(), "i".into());

        assert!(require_owner(&post, owner).is_ok());
        assert!(matches!(
            require_owner(&post, Uuid::new_v4()),
            Err(DomainError::Unauthorized)
        ));
    }
}
