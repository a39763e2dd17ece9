//! Vocabulary commands: add, list, edit, rm.
//!
//! All of these operate on the logged-in session user. The category default
//! (first letter of the word, uppercased) is a presentation convention and
//! lives here, not in the core; the core treats category as opaque.

use tracing::info;

use crate::cli::{output, session_user};
use crate::core::domain::NewVocabularyItem;
use crate::core::vault::Vault;
use crate::error::{RecordError, Result};

/// Add a vocabulary item for the session user.
pub fn add(
    word: String,
    definition: String,
    example: Option<String>,
    synonyms: Option<String>,
    antonyms: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    let category = category.unwrap_or_else(|| default_category(&word));
    let draft = NewVocabularyItem {
        word: word.clone(),
        definition,
        example,
        synonyms,
        antonyms,
        category,
    };

    if !vault.add_vocabulary_item(&user.id, draft)? {
        return Err(RecordError::SessionUserMissing.into());
    }

    output::success(&format!("added {}", output::key(&word)));
    Ok(())
}

/// List the session user's vocabulary, newest first.
pub fn list(category: Option<&str>, json: bool) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    let mut items = vault.user_vocabularies(&user.id)?;
    if let Some(category) = category {
        items.retain(|item| item.category == category);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        output::dimmed("no words stored");
    } else {
        println!();
        output::header(&format!("{} words", items.len()));
        output::rule();
        for item in &items {
            output::list_item(&format!("{}  {}", output::key(&item.word), item.definition));
            output::list_detail(&format!(
                "id: {}  category: {}  added: {}",
                item.id, item.category, item.created_at
            ));
        }
    }

    Ok(())
}

/// Edit a vocabulary item: unset flags keep the stored values.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    id: &str,
    word: Option<String>,
    definition: Option<String>,
    example: Option<String>,
    synonyms: Option<String>,
    antonyms: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    let mut item = vault
        .user_vocabularies(&user.id)?
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| RecordError::ItemNotFound(id.to_string()))?;

    if let Some(word) = word {
        item.word = word;
    }
    if let Some(definition) = definition {
        item.definition = definition;
    }
    if let Some(example) = example {
        item.example = Some(example);
    }
    if let Some(synonyms) = synonyms {
        item.synonyms = Some(synonyms);
    }
    if let Some(antonyms) = antonyms {
        item.antonyms = Some(antonyms);
    }
    if let Some(category) = category {
        item.category = category;
    }

    let word = item.word.clone();
    if !vault.update_vocabulary_item(&user.id, item)? {
        return Err(RecordError::ItemNotFound(id.to_string()).into());
    }

    info!(id, "item updated");
    output::success(&format!("updated {}", output::key(&word)));
    Ok(())
}

/// Remove a vocabulary item by id.
pub fn rm(id: &str) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    if !vault.delete_vocabulary_item(&user.id, id)? {
        return Err(RecordError::SessionUserMissing.into());
    }

    output::success(&format!("removed {}", output::key(id)));
    Ok(())
}

/// Default category tag: the word's first letter, uppercased, when it is
/// ASCII alphabetic; empty otherwise.
fn default_category(word: &str) -> String {
    word.trim()
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::default_category;

    #[test]
    fn test_default_category_first_letter() {
        assert_eq!(default_category("ephemeral"), "E");
        assert_eq!(default_category("  zephyr"), "Z");
        assert_eq!(default_category("42nd"), "");
        assert_eq!(default_category(""), "");
    }
}
