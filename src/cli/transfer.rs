//! Bundle export and import commands.
//!
//! The file mechanics live here; the core only produces and consumes the
//! document text.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{output, session_user};
use crate::core::vault::Vault;
use crate::error::{RecordError, Result};

/// Export the session user's collection, to stdout or to a file.
pub fn export(output_path: Option<PathBuf>) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    let Some(document) = vault.export_user_data(&user.id)? else {
        return Err(RecordError::SessionUserMissing.into());
    };

    match output_path {
        Some(path) => {
            fs::write(&path, &document)?;
            info!(path = %path.display(), "bundle written");
            output::success(&format!(
                "exported to {}",
                output::path(&path.display().to_string())
            ));
        }
        // Plain output for piping - no decoration
        None => println!("{}", document),
    }

    Ok(())
}

/// Import a bundle file into the session user's collection.
pub fn import(path: &Path) -> Result<()> {
    let vault = Vault::open()?;
    let user = session_user(&vault)?;

    let document = fs::read_to_string(path)?;

    if !vault.import_vocabulary_items(&user.id, &document)? {
        return Err(RecordError::InvalidBundle.into());
    }

    info!(path = %path.display(), "bundle imported");
    output::success(&format!(
        "imported {}",
        output::path(&path.display().to_string())
    ));
    Ok(())
}
