//! User directory: profile lookups for actors and review authors.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use learnhub_core::{DomainError, DomainResult, UserId};

use crate::{Actor, Role};

/// Public profile of a platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            role,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id.clone(), self.role.clone())
    }
}

/// Read access to user profiles. `Ok(None)` is an unknown user.
pub trait UserDirectory: Send + Sync {
    fn get(&self, user_id: &UserId) -> DomainResult<Option<UserProfile>>;
}

impl<S> UserDirectory for Arc<S>
where
    S: UserDirectory + ?Sized,
{
    fn get(&self, user_id: &UserId) -> DomainResult<Option<UserProfile>> {
        (**self).get(user_id)
    }
}

/// In-memory user directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    inner: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserProfile>) -> Self {
        let map = users
            .into_iter()
            .map(|profile| (profile.user_id.clone(), profile))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    pub fn upsert(&self, profile: UserProfile) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("user directory lock poisoned")
}

impl UserDirectory for InMemoryUserDirectory {
    fn get(&self, user_id: &UserId) -> DomainResult<Option<UserProfile>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_stored_profile() {
        let directory = InMemoryUserDirectory::with_users([
            UserProfile::new("user_002", "Bob Smith", Role::STUDENT).with_avatar("https://img/bob.jpg"),
        ]);

        let bob = directory.get(&UserId::from("user_002")).unwrap().unwrap();
        assert_eq!(bob.name, "Bob Smith");
        assert_eq!(bob.avatar.as_deref(), Some("https://img/bob.jpg"));
        assert_eq!(bob.actor(), Actor::new("user_002", Role::STUDENT));

        assert!(directory.get(&UserId::from("user_999")).unwrap().is_none());
    }

    #[test]
    fn poisoned_lock_surfaces_as_storage_error() {
        let directory = Arc::new(InMemoryUserDirectory::with_users([UserProfile::new(
            "user_002",
            "Bob Smith",
            Role::STUDENT,
        )]));

        let poisoner = directory.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(
            directory.get(&UserId::from("user_002")),
            Err(DomainError::Storage(_))
        ));
        assert!(matches!(
            directory.upsert(UserProfile::new("user_005", "Emma Brown", Role::STUDENT)),
            Err(DomainError::Storage(_))
        ));
    }
}
