//! Session bookmarks.

use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use super::entities::ItemId;

/// Result of a toggle, so the caller can show "saved" or "removed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub added: bool,
}

/// Set of saved item ids for the current session. Safe to share across threads;
/// concurrent toggles are serialised and the last one wins.
#[derive(Debug, Default)]
pub struct SavedItemRegistry {
    ids: Mutex<HashSet<ItemId>>,
}

impl SavedItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, otherwise removes it.
    pub fn toggle(&self, id: &str) -> ToggleOutcome {
        let mut ids = self.lock();
        let added = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };
        debug!(id, added, "toggled saved item");
        ToggleOutcome { added }
    }

    pub fn has(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    /// Snapshot of the saved ids.
    pub fn all(&self) -> HashSet<ItemId> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every mutation leaves the set consistent, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashSet<ItemId>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
