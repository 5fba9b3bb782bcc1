//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A registered user of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address, used for login.
    pub email: String,

    /// Job title / position of the user.
    pub charge: String,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Creates a new user with a fresh identifier.
    #[must_use]
    pub fn new(name: String, email: String, charge: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            charge,
            password_hash,
        }
    }
}
