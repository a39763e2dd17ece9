//! Slot storage.
//!
//! The persistence medium is modeled as named slots holding opaque text
//! (ciphertext blobs). The trait keeps the vault independent of the actual
//! medium so tests can substitute an in-memory implementation.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SlotStore` trait
//! 2. Add the implementation in a new file (e.g., `sqlite.rs`)
//! 3. Re-export from this module

use crate::error::Result;

mod fs;
mod memory;

pub use fs::FilesystemSlots;
pub use memory::MemorySlots;

/// Keyed slot storage trait.
///
/// Each slot holds at most one opaque text value. Implementations must make
/// `set` atomic from the reader's perspective: a slot always yields either
/// the previous value or the new one, never a partial write.
pub trait SlotStore {
    /// Read a slot.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the slot has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium cannot be read.
    fn get(&self, slot: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium cannot be written.
    fn set(&self, slot: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium cannot be modified.
    fn remove(&self, slot: &str) -> Result<()>;
}
