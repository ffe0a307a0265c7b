use core::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};
use crate::models::HighlightState;
use crate::store::HighlightStore;

/// In-memory store for highlight state, keyed by view identifier. Useful in
/// tests and for hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryHighlightStore {
    states: RefCell<BTreeMap<String, HighlightState>>,
}

// Callers serialize access through &mut self on the trait's mutating
// methods; the RefCell is never borrowed across a call boundary.
unsafe impl Send for MemoryHighlightStore {}
unsafe impl Sync for MemoryHighlightStore {}

impl MemoryHighlightStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: RefCell::new(BTreeMap::new()),
        }
    }
}

impl HighlightStore for MemoryHighlightStore {
    fn load(&self, view_id: &str) -> StoreResult<Option<HighlightState>> {
        Ok(self.states.borrow().get(view_id).cloned())
    }

    fn save(&mut self, state: &HighlightState) -> StoreResult<()> {
        if state.view_id.is_empty() {
            return Err(StoreError::EmptyIdentifier);
        }
        self.states
            .borrow_mut()
            .insert(state.view_id.clone(), state.clone());
        Ok(())
    }

    fn delete(&mut self, view_id: &str) -> StoreResult<()> {
        self.states.borrow_mut().remove(view_id);
        Ok(())
    }

    fn list_views(&self) -> StoreResult<Vec<String>> {
        Ok(self.states.borrow().keys().cloned().collect())
    }
}
