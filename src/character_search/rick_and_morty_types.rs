//! Wire types for the character catalog GraphQL endpoint.
//!
//! These structures mirror the JSON request and response envelopes of the
//! GraphQL API. Nullable response fields stay `Option` here so the
//! distinction between an absent count and a zero count survives decoding.

use super::Character;
use serde::{Deserialize, Serialize};

/// Request envelope posted to the endpoint.
#[derive(Debug, Serialize)]
pub(super) struct GraphQlRequest<'a> {
    /// The fixed search document
    pub query: &'static str,
    /// Per-request variables
    pub variables: SearchVariables<'a>,
}

/// Variables of the search document.
#[derive(Debug, Serialize)]
pub(super) struct SearchVariables<'a> {
    /// 1-based page to fetch
    pub page: u32,
    /// Normalized name filter
    pub name: &'a str,
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse {
    /// Query payload; null when the endpoint rejected the query outright
    #[serde(default)]
    pub data: Option<ResponseData>,
    /// Errors reported by the endpoint, possibly alongside partial data
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single error entry from the endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    /// Endpoint-supplied description
    pub message: String,
}

/// The `data` object of a search response.
#[derive(Debug, Deserialize)]
pub(super) struct ResponseData {
    /// The paged character listing; null when nothing matched
    #[serde(default)]
    pub characters: Option<CharactersPayload>,
}

/// The paged character listing.
#[derive(Debug, Deserialize)]
pub(super) struct CharactersPayload {
    /// Page metadata; the count inside may be null
    #[serde(default)]
    pub info: Option<PageInfo>,
    /// Characters on the requested page
    #[serde(default)]
    pub results: Option<Vec<Character>>,
}

/// Page metadata of a character listing.
#[derive(Debug, Deserialize)]
pub(super) struct PageInfo {
    /// Total matches across all pages (null for no matches)
    #[serde(default)]
    pub count: Option<u32>,
}
