//! Ownership policy for review mutations.
//!
//! - No IO
//! - No panics
//! - No business logic beyond "who may touch what"

use thiserror::Error;

use learnhub_core::{DomainError, UserId};

use crate::Actor;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("only the author may {0}")]
    NotAuthor(&'static str),

    #[error("only the author or an admin may {0}")]
    NotAuthorOrAdmin(&'static str),

    #[error("authors cannot {0} their own content")]
    OwnContent(&'static str),
}

impl From<AuthzError> for DomainError {
    fn from(value: AuthzError) -> Self {
        DomainError::Forbidden(value.to_string())
    }
}

/// Allow only the owner of a resource.
pub fn require_author(actor: &Actor, owner: &UserId, action: &'static str) -> Result<(), AuthzError> {
    if actor.is(owner) {
        Ok(())
    } else {
        Err(AuthzError::NotAuthor(action))
    }
}

/// Allow the owner of a resource or any admin.
pub fn require_author_or_admin(
    actor: &Actor,
    owner: &UserId,
    action: &'static str,
) -> Result<(), AuthzError> {
    if actor.is(owner) || actor.is_admin() {
        Ok(())
    } else {
        Err(AuthzError::NotAuthorOrAdmin(action))
    }
}

/// Allow anyone except the owner of a resource.
pub fn forbid_author(actor: &Actor, owner: &UserId, action: &'static str) -> Result<(), AuthzError> {
    if actor.is(owner) {
        Err(AuthzError::OwnContent(action))
    } else {
        Ok(())
    }
}
