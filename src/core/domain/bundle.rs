//! Export bundle format.

use serde::{Deserialize, Serialize};

use super::VocabularyItem;

/// Portable snapshot of one user's vocabulary collection.
///
/// A read-only document: it is never round-tripped back into a `User`
/// wholesale, and import consumes only its `vocabularies` field. The
/// password hash is never part of a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub username: String,
    pub email: String,
    pub vocabularies: Vec<VocabularyItem>,
    pub export_date: String,
}
