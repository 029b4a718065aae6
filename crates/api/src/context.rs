use learnhub_auth::{Actor, Role};
use learnhub_core::UserId;

/// Authenticated actor for a request.
///
/// Inserted by the auth middleware; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    actor: Actor,
}

impl ActorContext {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn user_id(&self) -> &UserId {
        &self.actor.user_id
    }

    pub fn role(&self) -> &Role {
        &self.actor.role
    }
}
