//! Bearer-token resolution.
//!
//! The reviews service never interprets tokens itself; it asks a
//! [`TokenResolver`] for the actor behind one.

use std::sync::Arc;

use thiserror::Error;

use learnhub_core::UserId;

use crate::{Actor, UserDirectory};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("unknown principal")]
    UnknownPrincipal,

    /// The directory could not be consulted; the token may well be valid.
    #[error("user directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Capability: map a bearer token to the authenticated actor.
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Actor, TokenError>;
}

impl<S> TokenResolver for Arc<S>
where
    S: TokenResolver + ?Sized,
{
    fn resolve(&self, token: &str) -> Result<Actor, TokenError> {
        (**self).resolve(token)
    }
}

/// Development resolver for tokens of the form `mock_token_<user_id>`.
///
/// The user id must exist in the backing directory; the actor's role is the
/// directory's role for that user.
pub struct MockTokenResolver<D> {
    directory: D,
}

impl<D> MockTokenResolver<D> {
    pub const PREFIX: &'static str = "mock_token_";

    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Token that this resolver accepts for `user_id`.
    pub fn token_for(user_id: &UserId) -> String {
        format!("{}{}", Self::PREFIX, user_id)
    }
}

impl<D: UserDirectory> TokenResolver for MockTokenResolver<D> {
    fn resolve(&self, token: &str) -> Result<Actor, TokenError> {
        let raw = token
            .strip_prefix(Self::PREFIX)
            .filter(|rest| !rest.is_empty())
            .ok_or(TokenError::Malformed)?;

        self.directory
            .get(&UserId::from(raw))
            .map_err(|e| TokenError::DirectoryUnavailable(e.to_string()))?
            .map(|profile| profile.actor())
            .ok_or(TokenError::UnknownPrincipal)
    }
}
