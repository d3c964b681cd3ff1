//! The search and selection repository.
//!
//! This is the single seam between callers and the two adapters: it
//! validates and normalizes queries before any I/O, delegates to the
//! injected search provider and selection store, and converts every
//! adapter error into the closed [`Failure`] taxonomy. Callers never see
//! an adapter error type and never observe a panic from these operations.

use crate::character_search::{
    Character, CharacterPage, CharacterSearchProvider, SearchQuery,
};
use crate::failure::{Failure, Result};
use crate::selection_store::{KeyValueStore, SelectionStore, SelectionStoreError};

/// Message returned when a query contains characters outside the latin
/// alphabet.
pub const NON_LATIN_CHARACTERS_MSG: &str = "Please use latin characters only.";

/// Repository orchestrating remote character search and local selection
/// persistence.
///
/// A repository instance exclusively owns its two adapters for its
/// lifetime. Operations are independently idempotent; repeated calls with
/// identical input do not interfere with each other. There is no retry,
/// no caching, and no ordering guarantee between overlapping searches;
/// discarding a superseded result is the caller's concern.
pub struct CharacterRepository<P, S>
where
    P: CharacterSearchProvider,
    S: KeyValueStore,
{
    provider: P,
    selection_store: SelectionStore<S>,
}

impl<P, S> CharacterRepository<P, S>
where
    P: CharacterSearchProvider,
    S: KeyValueStore,
{
    /// Creates a repository over the given adapters.
    pub fn new(provider: P, selection_store: SelectionStore<S>) -> Self {
        Self {
            provider,
            selection_store,
        }
    }

    /// Searches the catalog by name.
    ///
    /// The query name must consist of latin letters and whitespace only;
    /// anything else is rejected before any network traffic happens.
    /// Interior whitespace runs are collapsed to a single space and the
    /// name is trimmed before the provider sees it.
    ///
    /// # Arguments
    ///
    /// * `query` - The page and raw name filter to search for
    ///
    /// # Returns
    ///
    /// The matching page, or a `Format` failure for invalid input and a
    /// `RemoteSearch` failure when the provider call fails.
    pub fn search(&self, query: &SearchQuery) -> Result<CharacterPage> {
        tracing::debug!(page = query.page, name = %query.name, "search started");

        if !is_latin_name(&query.name) {
            tracing::warn!("search failed: query contains non-latin characters");
            return Err(Failure::format(NON_LATIN_CHARACTERS_MSG));
        }

        let normalized = SearchQuery {
            page: query.page,
            name: normalize_name(&query.name),
        };

        let page = self.provider.search(&normalized).map_err(|e| {
            tracing::warn!(error = %e, "search failed");
            Failure::remote_search(e)
        })?;

        tracing::debug!(total_count = ?page.total_count, "search finished");
        Ok(page)
    }

    /// Persists the full selection, replacing the stored set.
    ///
    /// The repository holds no selection state of its own, so a failed
    /// save rolls nothing back; the caller decides what to do with its
    /// in-memory selection.
    pub fn save_selection(&self, selection: &[Character]) -> Result<()> {
        tracing::debug!(count = selection.len(), "save selection started");

        self.selection_store.save(selection).map_err(|e| {
            tracing::warn!(error = %e, "save selection failed");
            store_failure(e)
        })?;

        tracing::debug!("save selection finished");
        Ok(())
    }

    /// Restores the persisted selection.
    ///
    /// Yields an empty selection when nothing was ever saved.
    pub fn saved_selection(&self) -> Result<Vec<Character>> {
        tracing::debug!("load selection started");

        let selection = self.selection_store.load().map_err(|e| {
            tracing::warn!(error = %e, "load selection failed");
            store_failure(e)
        })?;

        tracing::debug!(count = selection.len(), "load selection finished");
        Ok(selection)
    }
}

/// Maps a selection-store error onto the public failure taxonomy.
///
/// Backend faults and an undecodable persisted blob are persistence
/// failures. Failing to serialize in-memory data is not a store fault and
/// falls through to the uncategorized kind.
fn store_failure(error: SelectionStoreError) -> Failure {
    match error {
        e @ SelectionStoreError::Serialization(_) => Failure::unexpected(e),
        e => Failure::local_store(e),
    }
}

fn is_latin_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Collapses interior whitespace runs to a single space and trims both
/// ends.
fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
