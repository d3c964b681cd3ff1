//! Data structures and traits for remote character catalog search.
//!
//! This module defines the catalog entities returned by a name search, the
//! paged query sent to a provider, and the trait a concrete search
//! provider implements.

mod rick_and_morty;
mod rick_and_morty_types;

pub use rick_and_morty::RickAndMortyProvider;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a remote character search.
#[derive(Debug, Error)]
pub enum CharacterSearchError {
    /// Request to the search endpoint failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the endpoint's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The endpoint reported errors for the query and returned no data
    #[error("Search rejected by endpoint: {0}")]
    ErrorResponse(String),

    /// The endpoint returned neither character data nor errors
    #[error("API returned invalid data: {0}")]
    InvalidData(String),
}

/// A reference to one episode a character appears in.
///
/// Only the identifier is carried; consumers use the *number* of
/// references, not their content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRef {
    /// Opaque episode identifier
    pub id: String,
}

/// A single character entry from the catalog.
///
/// Immutable once received from the remote provider; a newer state is
/// obtained by searching again, never by patching in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Portrait image URI
    pub image: String,
    /// Episodes the character appears in, in catalog order
    pub episode: Vec<EpisodeRef>,
}

impl Character {
    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// A paged name query against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 1-based page to fetch
    pub page: u32,
    /// Name filter; validated and normalized by the repository before a
    /// provider ever sees it
    pub name: String,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPage {
    /// Total matches across all pages. `None` when the endpoint omitted
    /// the count, which it does for a query matching nothing.
    pub total_count: Option<u32>,
    /// Characters on this page, in endpoint order, not deduplicated
    pub characters: Vec<Character>,
}

impl CharacterPage {
    /// Total matches, folding an omitted count into zero.
    ///
    /// The wire format reports "no matches" either as a zero count or by
    /// omitting the count entirely; both mean the same thing to a caller
    /// deciding whether to render results.
    pub fn match_count(&self) -> u32 {
        self.total_count.unwrap_or(0)
    }
}

/// Trait for providers that search a character catalog by name.
///
/// Implementors wrap one remote search API. They receive already
/// validated and normalized queries, issue exactly one call per
/// invocation, and never retry or cache.
pub trait CharacterSearchProvider {
    /// Runs a single paged name search against the catalog.
    ///
    /// # Arguments
    ///
    /// * `query` - The normalized page and name filter to search for
    ///
    /// # Returns
    ///
    /// A Result containing the matching page, or a CharacterSearchError
    fn search(&self, query: &SearchQuery) -> Result<CharacterPage, CharacterSearchError>;
}
