//! Casting Call - search a remote character catalog and keep a selected
//! cast across sessions.
//!
//! This library is consumed by a host UI process. It provides a
//! [`CharacterRepository`] orchestrating two injected adapters (a remote
//! catalog search provider and a local key-value selection store), three
//! use-case functions pinning the external call contract, and a
//! [`bootstrap`] composition root wiring the default adapters.
//!
//! Every operation returns the crate [`Result`], whose error side is the
//! closed [`Failure`] taxonomy; no adapter error and no panic crosses the
//! library boundary.

mod character_search;
mod failure;
mod file_store;
mod repository;
mod selection_store;

pub use character_search::{
    Character, CharacterPage, CharacterSearchError, CharacterSearchProvider, EpisodeRef,
    RickAndMortyProvider, SearchQuery,
};
pub use failure::{Failure, FailureKind, Result};
pub use file_store::FileKeyValueStore;
pub use repository::{CharacterRepository, NON_LATIN_CHARACTERS_MSG};
pub use selection_store::{
    KeyValueStore, SAVED_CHARACTERS_KEY, SelectionStore, SelectionStoreError,
};

/// Searches the character catalog by name.
///
/// Forwards to [`CharacterRepository::search`] and returns its result
/// unchanged. Blocks on network I/O; a caller issuing overlapping
/// searches is responsible for discarding superseded results.
pub fn search_characters<P, S>(
    repository: &CharacterRepository<P, S>,
    query: &SearchQuery,
) -> Result<CharacterPage>
where
    P: CharacterSearchProvider,
    S: KeyValueStore,
{
    repository.search(query)
}

/// Persists the user's selected characters, replacing the stored set.
///
/// Forwards to [`CharacterRepository::save_selection`] and returns its
/// result unchanged.
pub fn save_selected_characters<P, S>(
    repository: &CharacterRepository<P, S>,
    selection: &[Character],
) -> Result<()>
where
    P: CharacterSearchProvider,
    S: KeyValueStore,
{
    repository.save_selection(selection)
}

/// Restores the previously saved selection.
///
/// Forwards to [`CharacterRepository::saved_selection`] and returns its
/// result unchanged; the selection is empty when nothing was ever saved.
pub fn get_saved_selected_characters<P, S>(
    repository: &CharacterRepository<P, S>,
) -> Result<Vec<Character>>
where
    P: CharacterSearchProvider,
    S: KeyValueStore,
{
    repository.saved_selection()
}

/// The repository type produced by [`bootstrap`].
pub type DefaultRepository = CharacterRepository<RickAndMortyProvider, FileKeyValueStore>;

/// Builds the default dependency graph once, at process start.
///
/// Wires the public catalog endpoint and the platform file store into a
/// repository, by explicit constructor injection. Hosts with their own
/// adapters construct [`CharacterRepository`] directly instead.
///
/// # Errors
///
/// Returns a `LocalStore` failure if the platform data directory cannot
/// be determined or created.
pub fn bootstrap() -> Result<DefaultRepository> {
    let provider = RickAndMortyProvider::new();
    let store = FileKeyValueStore::open().map_err(Failure::local_store)?;

    Ok(CharacterRepository::new(
        provider,
        SelectionStore::new(store),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FixedProvider {
        page: CharacterPage,
    }

    impl CharacterSearchProvider for FixedProvider {
        fn search(
            &self,
            _query: &SearchQuery,
        ) -> std::result::Result<CharacterPage, CharacterSearchError> {
            Ok(self.page.clone())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(
            &self,
            key: &str,
        ) -> std::result::Result<Option<String>, SelectionStoreError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> std::result::Result<(), SelectionStoreError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn repository(page: CharacterPage) -> CharacterRepository<FixedProvider, MemoryStore> {
        CharacterRepository::new(
            FixedProvider { page },
            SelectionStore::new(MemoryStore::default()),
        )
    }

    #[test]
    fn test_search_characters_forwards_repository_result() {
        let page = CharacterPage {
            total_count: Some(1),
            characters: vec![Character {
                id: "1".to_string(),
                name: "Rick".to_string(),
                image: "url".to_string(),
                episode: vec![EpisodeRef {
                    id: "1".to_string(),
                }],
            }],
        };
        let repo = repository(page.clone());

        let result = search_characters(
            &repo,
            &SearchQuery {
                page: 1,
                name: "Rick".to_string(),
            },
        );

        assert_eq!(result.unwrap(), page);
    }

    #[test]
    fn test_selection_round_trip_through_use_cases() {
        let repo = repository(CharacterPage {
            total_count: None,
            characters: Vec::new(),
        });
        let selection = vec![Character {
            id: "2".to_string(),
            name: "Morty".to_string(),
            image: "url".to_string(),
            episode: Vec::new(),
        }];

        save_selected_characters(&repo, &selection).unwrap();

        assert_eq!(get_saved_selected_characters(&repo).unwrap(), selection);
    }

    #[test]
    fn test_use_cases_forward_failures_unchanged() {
        let repo = repository(CharacterPage {
            total_count: None,
            characters: Vec::new(),
        });

        let failure = search_characters(
            &repo,
            &SearchQuery {
                page: 1,
                name: "Rick&Morty".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Format);
        assert_eq!(failure.message(), NON_LATIN_CHARACTERS_MSG);
    }
}
