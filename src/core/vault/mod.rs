//! The primary interface for vocabvault operations.
//!
//! Vault owns the slot store and the codec and provides users-collection
//! access, session handling, vocabulary CRUD, and bundle export/import.

mod bundle;
mod records;
mod session;

use tracing::{debug, warn};

use crate::core::codec::Codec;
use crate::core::config::Config;
use crate::core::constants::USERS_SLOT;
use crate::core::domain::User;
use crate::core::store::{FilesystemSlots, SlotStore};
use crate::error::Result;

/// The primary interface for vocabvault operations.
///
/// All mutations are whole-collection read-modify-write cycles: load the
/// full users list, mutate the target record, write the full list back.
/// There is no locking across processes; last writer wins on the whole
/// collection.
pub struct Vault {
    store: Box<dyn SlotStore>,
    codec: Codec,
}

impl Vault {
    /// Open the vault on the configured filesystem store.
    ///
    /// Runs `initialize()`, so the users slot is guaranteed to exist
    /// afterwards. Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns error if configuration or the initial slot write fails.
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let codec = Codec::new(&config.secret_key);
        let store = FilesystemSlots::new(config.data_dir);

        let vault = Self {
            store: Box::new(store),
            codec,
        };
        vault.initialize()?;

        Ok(vault)
    }

    /// Build a vault over an injected store and codec.
    ///
    /// The seam used by tests and by callers with a non-default medium.
    /// Does not initialize; call `initialize()` if the users slot may be
    /// absent.
    pub fn with_store(store: Box<dyn SlotStore>, codec: Codec) -> Self {
        Self { store, codec }
    }

    /// Seed the users slot with an encrypted empty collection if absent.
    ///
    /// Idempotent: an existing slot is left untouched, whatever it holds.
    pub fn initialize(&self) -> Result<()> {
        if self.store.get(USERS_SLOT)?.is_none() {
            debug!("users slot absent, seeding empty collection");
            self.save_users(&[])?;
        }
        Ok(())
    }

    /// Read the full users collection.
    ///
    /// Self-heals: if the slot is absent or does not decode to a
    /// collection, persists an encrypted empty collection back to the slot
    /// and returns `[]`, so subsequent reads are consistent.
    pub fn users(&self) -> Result<Vec<User>> {
        let Some(blob) = self.store.get(USERS_SLOT)? else {
            debug!("users slot missing, resetting to empty");
            self.save_users(&[])?;
            return Ok(Vec::new());
        };

        match self.codec.decrypt_value::<Vec<User>>(&blob) {
            Some(users) => Ok(users),
            None => {
                warn!("users slot did not decode to a collection, resetting");
                self.save_users(&[])?;
                Ok(Vec::new())
            }
        }
    }

    /// Encrypt and write the full users collection.
    ///
    /// The write is atomic at the slot level: readers observe either the
    /// previous collection or this one.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        let blob = self.codec.encrypt_value(users)?;
        self.store.set(USERS_SLOT, &blob)?;
        debug!(count = users.len(), "saved users collection");
        Ok(())
    }

    pub(crate) fn codec(&self) -> &Codec {
        &self.codec
    }

    pub(crate) fn store(&self) -> &dyn SlotStore {
        self.store.as_ref()
    }

    /// Load, locate by id, mutate, save. Returns `Ok(false)` without
    /// writing when the user is unknown or the closure declines the
    /// mutation.
    pub(crate) fn mutate_user<F>(&self, user_id: &str, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut User) -> bool,
    {
        let mut users = self.users()?;
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            debug!(user_id, "user not found");
            return Ok(false);
        };

        if !mutate(user) {
            return Ok(false);
        }

        self.save_users(&users)?;
        Ok(true)
    }
}
