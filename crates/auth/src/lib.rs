//! `learnhub-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod actor;
pub mod authorize;
pub mod directory;
pub mod resolver;
pub mod roles;

pub use actor::Actor;
pub use authorize::{AuthzError, forbid_author, require_author, require_author_or_admin};
pub use directory::{InMemoryUserDirectory, UserDirectory, UserProfile};
pub use resolver::{MockTokenResolver, TokenError, TokenResolver};
pub use roles::Role;
