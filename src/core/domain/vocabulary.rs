//! Vocabulary item types.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single vocabulary entry.
///
/// `id` is unique within the owning user's collection. `created_at` is an
/// ISO-8601 timestamp set once at creation and immutable thereafter; updates
/// replace the whole item but keep its id and position. `synonyms` and
/// `antonyms` are comma-joined lists; absent and empty mean the same thing
/// to consumers, and absent fields are omitted from JSON.
///
/// Field names serialize in camelCase to match the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<String>,
    #[serde(default)]
    pub category: String,
    pub created_at: String,
}

/// Payload for adding a vocabulary item: everything except the generated
/// `id` and `created_at`.
#[derive(Debug, Clone, Default)]
pub struct NewVocabularyItem {
    pub word: String,
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Option<String>,
    pub antonyms: Option<String>,
    pub category: String,
}

/// Current time as an ISO-8601 / RFC 3339 string with millisecond precision.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
