//! Filesystem-based slot storage.
//!
//! Each slot is one file under the data directory
//! (`<data_dir>/<slot>.age`). Writes go through a temp file followed by a
//! rename, so a crash mid-write leaves the previous value intact.

use std::fs;
use std::path::PathBuf;

use tracing::trace;

use super::SlotStore;
use crate::core::constants;
use crate::error::{Result, StoreError};

/// Filesystem slot storage rooted at a data directory.
pub struct FilesystemSlots {
    dir: PathBuf,
}

impl FilesystemSlots {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slot, constants::SLOT_EXT))
    }

    fn temp_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!(".{}.tmp", slot))
    }
}

impl SlotStore for FilesystemSlots {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
            slot: slot.to_string(),
            source,
        })?;

        trace!(slot, bytes = contents.len(), "slot read");
        Ok(Some(contents))
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        let wrap = |source| StoreError::WriteFailed {
            slot: slot.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(wrap)?;

        let tmp = self.temp_path(slot);
        fs::write(&tmp, value).map_err(wrap)?;

        // Restrict permissions on slot files (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)).map_err(wrap)?;
        }

        fs::rename(&tmp, self.slot_path(slot)).map_err(wrap)?;

        trace!(slot, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|source| StoreError::RemoveFailed {
            slot: slot.to_string(),
            source,
        })?;

        trace!(slot, "slot removed");
        Ok(())
    }
}
