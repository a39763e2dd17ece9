//! Session projection of a user.

use serde::{Deserialize, Serialize};

use super::User;

/// The logged-in user as persisted in the session slot.
///
/// Deliberately excludes the password hash and the vocabulary collection;
/// it is derived from a `User` at login or signup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
