//! Session slot operations.

use tracing::debug;

use super::Vault;
use crate::core::constants::SESSION_SLOT;
use crate::core::domain::CurrentUser;
use crate::error::Result;

impl Vault {
    /// Read the current session user.
    ///
    /// An absent or corrupt session slot is `Ok(None)` ("not logged in").
    /// Unlike the users slot there is no invariant to restore, so no
    /// self-heal happens here.
    pub fn current_user(&self) -> Result<Option<CurrentUser>> {
        let Some(blob) = self.store().get(SESSION_SLOT)? else {
            return Ok(None);
        };
        Ok(self.codec().decrypt_value(&blob))
    }

    /// Encrypt and write the session user.
    pub fn save_current_user(&self, user: &CurrentUser) -> Result<()> {
        let blob = self.codec().encrypt_value(user)?;
        self.store().set(SESSION_SLOT, &blob)?;
        debug!(username = %user.username, "session saved");
        Ok(())
    }

    /// Clear the session slot.
    pub fn remove_current_user(&self) -> Result<()> {
        self.store().remove(SESSION_SLOT)?;
        debug!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::codec::Codec;
    use crate::core::constants::SESSION_SLOT;
    use crate::core::domain::CurrentUser;
    use crate::core::store::{MemorySlots, SlotStore};
    use crate::core::vault::Vault;

    fn test_vault() -> (MemorySlots, Vault) {
        let slots = MemorySlots::new();
        let vault = Vault::with_store(Box::new(slots.clone()), Codec::new("test key"));
        (slots, vault)
    }

    #[test]
    fn test_session_roundtrip_and_clear() {
        let (_slots, vault) = test_vault();
        assert!(vault.current_user().unwrap().is_none());

        let user = CurrentUser {
            id: "1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        vault.save_current_user(&user).unwrap();
        assert_eq!(vault.current_user().unwrap(), Some(user));

        vault.remove_current_user().unwrap();
        assert!(vault.current_user().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_session_reads_as_logged_out() {
        let (slots, vault) = test_vault();
        slots.set(SESSION_SLOT, "garbage").unwrap();

        assert!(vault.current_user().unwrap().is_none());

        // No self-heal on the session slot
        assert_eq!(slots.get(SESSION_SLOT).unwrap().as_deref(), Some("garbage"));
    }
}
