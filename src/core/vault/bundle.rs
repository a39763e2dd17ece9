//! Bundle export and import.
//!
//! Export produces a pretty-printed JSON snapshot of one user's collection.
//! Import merges a document's items back in by concatenation: every incoming
//! item is re-keyed with a fresh import id and prepended ahead of the
//! existing list, with no deduplication by word or content.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use super::Vault;
use crate::core::constants::IMPORT_ID_PREFIX;
use crate::core::domain::{current_timestamp, ExportBundle, VocabularyItem};
use crate::error::Result;

/// Lenient shape for incoming documents: only `vocabularies` matters, and
/// items keep whatever fields they carry. Any id they bring is discarded.
#[derive(Debug, Deserialize)]
struct IncomingBundle {
    vocabularies: Vec<IncomingItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomingItem {
    #[serde(default)]
    word: String,
    #[serde(default)]
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Option<String>,
    #[serde(default)]
    antonyms: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    created_at: Option<String>,
}

impl Vault {
    /// Export one user's collection as a portable JSON document.
    ///
    /// The document carries username, email, the full vocabulary list, and
    /// an export stamp; the password hash is never included.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if `user_id` matches no user.
    pub fn export_user_data(&self, user_id: &str) -> Result<Option<String>> {
        let Some(user) = self.users()?.into_iter().find(|u| u.id == user_id) else {
            debug!(user_id, "export for unknown user");
            return Ok(None);
        };

        let bundle = ExportBundle {
            username: user.username,
            email: user.email,
            vocabularies: user.vocabularies,
            export_date: current_timestamp(),
        };

        info!(count = bundle.vocabularies.len(), "exported bundle");
        Ok(Some(serde_json::to_string_pretty(&bundle)?))
    }

    /// Merge a bundle document into a user's collection.
    ///
    /// Each incoming item gets a freshly generated import id, distinct from
    /// every existing id regardless of what the document carried, and keeps
    /// its `created_at` when present (else stamped now). The batch is
    /// prepended ahead of the existing items with no deduplication, so
    /// importing the same bundle twice doubles the count.
    ///
    /// # Returns
    ///
    /// `Ok(false)` with no mutation if the document does not parse, its
    /// `vocabularies` field is not list-shaped, or `user_id` is unknown.
    pub fn import_vocabulary_items(&self, user_id: &str, document: &str) -> Result<bool> {
        let incoming: IncomingBundle = match serde_json::from_str(document) {
            Ok(incoming) => incoming,
            Err(e) => {
                debug!(error = %e, "import document rejected");
                return Ok(false);
            }
        };

        let imported: Vec<VocabularyItem> = incoming
            .vocabularies
            .into_iter()
            .map(|item| VocabularyItem {
                id: import_id(),
                word: item.word,
                definition: item.definition,
                example: item.example,
                synonyms: item.synonyms,
                antonyms: item.antonyms,
                category: item.category,
                created_at: item
                    .created_at
                    .filter(|stamp| !stamp.is_empty())
                    .unwrap_or_else(current_timestamp),
            })
            .collect();

        info!(user_id, count = imported.len(), "importing vocabulary items");

        self.mutate_user(user_id, |user| {
            let existing = std::mem::take(&mut user.vocabularies);
            user.vocabularies = imported.into_iter().chain(existing).collect();
            true
        })
    }
}

/// Fresh id for an imported item: import marker, millisecond timestamp,
/// random suffix.
fn import_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!(
        "{}_{}_{}",
        IMPORT_ID_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_id_format() {
        let id = import_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();

        assert_eq!(parts[0], "imported");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_import_ids_are_distinct() {
        let a = import_id();
        let b = import_id();
        assert_ne!(a, b);
    }
}
