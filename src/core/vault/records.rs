//! Vocabulary record operations.
//!
//! Whole-collection read-modify-write CRUD for items nested inside a user
//! record. Unknown users and unknown item ids are reported as `Ok(false)`
//! (or an empty list for reads), never as errors.

use tracing::{debug, info};
use uuid::Uuid;

use super::Vault;
use crate::core::domain::{current_timestamp, NewVocabularyItem, VocabularyItem};
use crate::error::Result;

impl Vault {
    /// Add a vocabulary item to a user's collection.
    ///
    /// Generates a fresh id and `created_at` stamp and prepends the item,
    /// keeping the collection newest-first.
    ///
    /// # Returns
    ///
    /// `Ok(false)` without mutation if `user_id` matches no user.
    pub fn add_vocabulary_item(&self, user_id: &str, draft: NewVocabularyItem) -> Result<bool> {
        let item = VocabularyItem {
            id: Uuid::new_v4().to_string(),
            word: draft.word,
            definition: draft.definition,
            example: draft.example,
            synonyms: draft.synonyms,
            antonyms: draft.antonyms,
            category: draft.category,
            created_at: current_timestamp(),
        };

        info!(user_id, word = %item.word, "adding vocabulary item");

        self.mutate_user(user_id, |user| {
            user.vocabularies.insert(0, item);
            true
        })
    }

    /// Replace the item with a matching id, preserving its position.
    ///
    /// # Returns
    ///
    /// `Ok(false)` without mutation if the user or the item id is unknown.
    pub fn update_vocabulary_item(&self, user_id: &str, item: VocabularyItem) -> Result<bool> {
        info!(user_id, item_id = %item.id, "updating vocabulary item");

        self.mutate_user(user_id, |user| {
            match user.vocabularies.iter_mut().find(|v| v.id == item.id) {
                Some(existing) => {
                    *existing = item;
                    true
                }
                None => {
                    debug!("item id not found, leaving collection unchanged");
                    false
                }
            }
        })
    }

    /// Remove the item with a matching id.
    ///
    /// Filtering an absent id yields the same collection and still counts
    /// as success; only an unknown `user_id` returns `Ok(false)`.
    pub fn delete_vocabulary_item(&self, user_id: &str, item_id: &str) -> Result<bool> {
        info!(user_id, item_id, "deleting vocabulary item");

        self.mutate_user(user_id, |user| {
            user.vocabularies.retain(|v| v.id != item_id);
            true
        })
    }

    /// All vocabulary items for a user, newest first.
    ///
    /// Returns `[]` for an unknown user; that is not an error.
    pub fn user_vocabularies(&self, user_id: &str) -> Result<Vec<VocabularyItem>> {
        Ok(self
            .users()?
            .into_iter()
            .find(|u| u.id == user_id)
            .map(|u| u.vocabularies)
            .unwrap_or_default())
    }
}
