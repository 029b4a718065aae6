use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for authorization decisions.
///
/// Roles are opaque strings at this layer. The platform issues `student`,
/// `instructor` and `admin`; only `admin` carries extra authority in the
/// reviews service (it may delete any review).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const STUDENT: Role = Role(Cow::Borrowed("student"));
    pub const INSTRUCTOR: Role = Role(Cow::Borrowed("instructor"));
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_admin(&self) -> bool {
        self.as_str() == "admin"
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
