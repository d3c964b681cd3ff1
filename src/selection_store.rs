//! Local persistence of the user's selected characters.
//!
//! The selection is stored as a single JSON array blob under a fixed key
//! in a synchronous key-value backend. Saves always replace the whole
//! blob; there is no partial update.

use crate::character_search::Character;
use thiserror::Error;

/// Fixed key the serialized selection is stored under.
pub const SAVED_CHARACTERS_KEY: &str = "SAVED_CHARACTERS";

/// Errors that can occur while persisting or restoring the selection.
#[derive(Debug, Error)]
pub enum SelectionStoreError {
    /// The underlying key-value backend rejected a read or write
    #[error("Store access failed: {0}")]
    Backend(String),

    /// Failed to serialize the in-memory selection
    #[error("Failed to serialize selection: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The persisted selection blob could not be decoded
    #[error("Failed to deserialize persisted selection: {0}")]
    Deserialization(#[source] serde_json::Error),
}

/// Abstraction over the synchronous key-value backend the selection is
/// persisted in.
///
/// Implementations must report an absent key as `Ok(None)`; only actual
/// backend faults are errors. Both operations block no longer than local
/// device speed.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key was
    /// never written.
    fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError>;
}

/// Persists and restores the selected-character set through a key-value
/// backend.
pub struct SelectionStore<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> SelectionStore<S>
where
    S: KeyValueStore,
{
    /// Creates a selection store over the given backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves the full selection, replacing whatever was stored before.
    pub fn save(&self, selection: &[Character]) -> Result<(), SelectionStoreError> {
        tracing::debug!(count = selection.len(), "saving selected characters");

        let blob =
            serde_json::to_string(selection).map_err(SelectionStoreError::Serialization)?;
        self.store.set(SAVED_CHARACTERS_KEY, &blob)?;

        tracing::debug!("selected characters saved");
        Ok(())
    }

    /// Loads the stored selection.
    ///
    /// A never-written store yields an empty selection. A blob that is
    /// present but undecodable is reported as
    /// [`SelectionStoreError::Deserialization`]; it is never silently
    /// replaced with an empty selection.
    pub fn load(&self) -> Result<Vec<Character>, SelectionStoreError> {
        tracing::debug!("loading selected characters");

        match self.store.get(SAVED_CHARACTERS_KEY)? {
            Some(blob) => {
                let selection = serde_json::from_str(&blob)
                    .map_err(SelectionStoreError::Deserialization)?;

                tracing::debug!("selected characters loaded");
                Ok(selection)
            }
            None => {
                tracing::debug!("no selection stored yet");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character_search::EpisodeRef;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn rick() -> Character {
        Character {
            id: "1".to_string(),
            name: "Rick".to_string(),
            image: "url".to_string(),
            episode: vec![
                EpisodeRef {
                    id: "1".to_string(),
                },
                EpisodeRef {
                    id: "2".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_save_writes_fixed_key_with_json_blob() {
        let store = SelectionStore::new(MemoryStore::default());

        store.save(&[rick()]).unwrap();

        let values = store.store.values.borrow();
        assert_eq!(
            values.get(SAVED_CHARACTERS_KEY).map(String::as_str),
            Some(
                r#"[{"id":"1","name":"Rick","image":"url","episode":[{"id":"1"},{"id":"2"}]}]"#
            )
        );
    }

    #[test]
    fn test_round_trip() {
        let store = SelectionStore::new(MemoryStore::default());
        let selection = vec![rick()];

        store.save(&selection).unwrap();

        assert_eq!(store.load().unwrap(), selection);
    }

    #[test]
    fn test_round_trip_empty_selection() {
        let store = SelectionStore::new(MemoryStore::default());

        store.save(&[]).unwrap();

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_load_without_prior_save_is_empty() {
        let store = SelectionStore::new(MemoryStore::default());

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_load_reports_corrupt_blob() {
        let store = SelectionStore::new(MemoryStore::default());
        store
            .store
            .values
            .borrow_mut()
            .insert(SAVED_CHARACTERS_KEY.to_string(), "not json".to_string());

        let result = store.load();

        assert!(matches!(
            result,
            Err(SelectionStoreError::Deserialization(_))
        ));
    }
}
