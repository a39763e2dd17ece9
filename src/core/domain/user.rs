//! User account record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::VocabularyItem;

/// A stored user account with its vocabulary collection.
///
/// `username` and `email` are unique across the collection; the signup
/// collaborator enforces that before the record reaches the store.
/// `password_hash` holds the SHA-256 digest, never the plaintext.
///
/// Field names serialize in camelCase to match the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub vocabularies: Vec<VocabularyItem>,
}

impl User {
    /// Create a new account with a generated id and an empty collection.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            vocabularies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "digest".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"passwordHash\":\"digest\""));
        assert!(json.contains("\"vocabularies\":[]"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_user_deserializes_without_vocabularies() {
        let json = r#"{"id":"1","username":"bob","email":"b@x.io","passwordHash":"d"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.vocabularies.is_empty());
    }
}
