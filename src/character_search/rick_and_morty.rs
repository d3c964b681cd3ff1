//! Rick and Morty catalog provider implementation.

use super::rick_and_morty_types::{GraphQlRequest, GraphQlResponse, SearchVariables};
use super::{CharacterPage, CharacterSearchError, CharacterSearchProvider, SearchQuery};

/// GraphQL document sent for every search request.
const SEARCH_CHARACTERS_QUERY: &str = r"
query SearchCharacters($page: Int!, $name: String!) {
  characters(page: $page, filter: { name: $name }) {
    info {
      count
    }
    results {
      id
      name
      image
      episode {
        id
      }
    }
  }
}";

/// Default public endpoint of the catalog.
const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Search provider for the Rick and Morty GraphQL API.
///
/// This provider posts the fixed `SearchCharacters` document to the
/// endpoint, one request per invocation, and decodes the response into a
/// [`CharacterPage`].
pub struct RickAndMortyProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl RickAndMortyProvider {
    /// Creates a provider against the public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a provider against a custom endpoint, e.g. a self-hosted
    /// mirror of the API.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Converts a decoded response envelope into a result page.
    ///
    /// A response carrying a `characters` object is a successful page even
    /// when the match count inside is null. Without one, endpoint-reported
    /// errors take precedence; a response with neither is invalid.
    fn convert_response(
        response: GraphQlResponse,
    ) -> Result<CharacterPage, CharacterSearchError> {
        if let Some(characters) = response.data.and_then(|data| data.characters) {
            return Ok(CharacterPage {
                total_count: characters.info.and_then(|info| info.count),
                characters: characters.results.unwrap_or_default(),
            });
        }

        match response.errors {
            Some(errors) if !errors.is_empty() => {
                let messages = errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");

                Err(CharacterSearchError::ErrorResponse(messages))
            }
            _ => Err(CharacterSearchError::InvalidData(
                "no character data in API response".to_string(),
            )),
        }
    }
}

impl Default for RickAndMortyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterSearchProvider for RickAndMortyProvider {
    fn search(&self, query: &SearchQuery) -> Result<CharacterPage, CharacterSearchError> {
        tracing::debug!(page = query.page, name = %query.name, "catalog search request");

        let body = GraphQlRequest {
            query: SEARCH_CHARACTERS_QUERY,
            variables: SearchVariables {
                page: query.page,
                name: &query.name,
            },
        };

        // Make the HTTP request
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| CharacterSearchError::RequestError(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(CharacterSearchError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        // Parse the JSON response
        let envelope: GraphQlResponse = response
            .json()
            .map_err(|e| CharacterSearchError::ParseError(e.to_string()))?;

        Self::convert_response(envelope)
    }
}
