use serde::{Deserialize, Serialize};

use learnhub_core::UserId;

use crate::Role;

/// The authenticated caller of an operation.
///
/// Construction is decoupled from transport: the API derives it from a bearer
/// token through a [`TokenResolver`](crate::TokenResolver), tests build it
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
