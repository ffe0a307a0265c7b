use std::fmt::Debug;

use crate::codec::{decode_state, encode_state};
use crate::error::{StoreError, StoreResult};
use crate::models::HighlightState;
use crate::store::HighlightStore;

/// Prefix for store entries, so highlight state can share a keyspace with
/// other app data without colliding.
const KEY_PREFIX: &str = "highlight-";

#[uniffi::trait_interface]
pub trait FileProvider: Send + Sync + Debug {
    /// Read the raw bytes stored under a key
    fn read(&self, path: &str) -> Option<Vec<u8>>;

    /// Write raw bytes under a key
    fn write(&mut self, path: &str, data: &[u8]) -> bool;

    /// Delete the entry under a key
    fn delete(&mut self, path: &str) -> bool;

    /// List all keys in the provider
    fn list(&self) -> Vec<String>;
}

/// Store backed by a host-supplied [`FileProvider`]. State is encoded as
/// CBOR and keyed `highlight-<view_id>`.
#[derive(Debug, uniffi::Object)]
pub struct FileHighlightStore {
    provider: Box<dyn FileProvider>,
}

impl FileHighlightStore {
    #[uniffi::constructor]
    #[must_use]
    pub fn new(provider: Box<dyn FileProvider>) -> Self {
        Self { provider }
    }

    fn storage_key(view_id: &str) -> String {
        format!("{KEY_PREFIX}{view_id}")
    }
}

impl HighlightStore for FileHighlightStore {
    fn load(&self, view_id: &str) -> StoreResult<Option<HighlightState>> {
        match self.provider.read(&Self::storage_key(view_id)) {
            Some(bytes) => Ok(Some(decode_state(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &HighlightState) -> StoreResult<()> {
        if state.view_id.is_empty() {
            return Err(StoreError::EmptyIdentifier);
        }
        let data = encode_state(state)?;
        if self.provider.write(&Self::storage_key(&state.view_id), &data) {
            Ok(())
        } else {
            Err(StoreError::io_error("failed to write highlight state"))
        }
    }

    fn delete(&mut self, view_id: &str) -> StoreResult<()> {
        if self.provider.delete(&Self::storage_key(view_id)) {
            Ok(())
        } else {
            Err(StoreError::not_found(view_id))
        }
    }

    fn list_views(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .provider
            .list()
            .iter()
            .filter_map(|key| key.strip_prefix(KEY_PREFIX))
            .map(ToString::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::range::TextRange;

    #[derive(Debug)]
    struct MockProvider {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
            }
        }
    }

    impl FileProvider for MockProvider {
        fn read(&self, path: &str) -> Option<Vec<u8>> {
            self.files.get(path).cloned()
        }

        fn write(&mut self, path: &str, data: &[u8]) -> bool {
            self.files.insert(path.to_string(), data.to_vec());
            true
        }

        fn delete(&mut self, path: &str) -> bool {
            self.files.remove(path).is_some()
        }

        fn list(&self) -> Vec<String> {
            self.files.keys().cloned().collect()
        }
    }

    #[test]
    fn entries_are_keyed_with_the_prefix() {
        let mut store = FileHighlightStore::new(Box::new(MockProvider::new()));

        let mut state = HighlightState::new("chapter-1");
        state.ranges.push(TextRange::new(5, 5));
        store.save(&state).unwrap();

        assert!(store.provider.read("highlight-chapter-1").is_some());
        assert_eq!(store.list_views().unwrap(), vec!["chapter-1".to_string()]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut store = FileHighlightStore::new(Box::new(MockProvider::new()));

        let mut state = HighlightState::new("chapter-1");
        state.ranges.push(TextRange::new(5, 5));
        state.menu_title = Some("Surligner".to_string());
        store.save(&state).unwrap();

        let loaded = store.load("chapter-1").unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn deleting_a_missing_view_reports_not_found() {
        let mut store = FileHighlightStore::new(Box::new(MockProvider::new()));
        assert!(matches!(
            store.delete("nope"),
            Err(StoreError::NotFound(view)) if view == "nope"
        ));
    }

    #[test]
    fn corrupt_bytes_surface_a_serialization_error() {
        let mut provider = Box::new(MockProvider::new());
        provider.write("highlight-bad", b"garbage");
        let store = FileHighlightStore::new(provider);

        assert!(matches!(
            store.load("bad"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn unprefixed_keys_are_ignored_when_listing() {
        let mut provider = Box::new(MockProvider::new());
        provider.write("unrelated-data", b"x");
        let mut store = FileHighlightStore::new(provider);

        store.save(&HighlightState::new("reader")).unwrap();
        assert_eq!(store.list_views().unwrap(), vec!["reader".to_string()]);
    }
}
