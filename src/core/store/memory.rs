//! In-memory slot storage.
//!
//! Test substitute for the filesystem store. Clones share the same
//! underlying map, so a test can hold a handle onto the slots while the
//! vault owns another.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::SlotStore;
use crate::error::Result;

/// In-memory slot storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlots {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().expect("slots poisoned").get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .expect("slots poisoned")
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.slots.lock().expect("slots poisoned").remove(slot);
        Ok(())
    }
}
