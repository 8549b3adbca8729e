//! Thin HTTP wrapper over the PokeAPI REST service.
//!
//! Each operation is exactly one round trip. No retry and no timeout
//! beyond the transport default; callers decide recovery.

use serde::de::DeserializeOwned;

use rotodex_api::raw::evolution::RawEvolutionChain;
use rotodex_api::raw::pokemon::{PagedList, RawPokemon};
use rotodex_api::raw::species::RawSpecies;
use rotodex_api::raw::types::TypeList;
use rotodex_catalog::TypeName;

use crate::ApiError;

/// Default upstream base URL.
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI gateway. Stateless apart from the connection pool.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway {
    /// Gateway against the public PokeAPI.
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// Gateway against a different base URL (staging, local mirror).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// One page of the pokemon index.
    pub async fn list_pokemon(&self, offset: u32, limit: u32) -> Result<PagedList, ApiError> {
        self.get_json(
            "pokemon",
            &[("offset", offset.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Full detail record, addressed by numeric id or lowercase name.
    /// The identifier is lowercased here so callers can pass user input.
    pub async fn get_detail(&self, id_or_name: &str) -> Result<RawPokemon, ApiError> {
        let identifier = id_or_name.trim().to_lowercase();
        self.get_json(&format!("pokemon/{identifier}"), &[]).await
    }

    /// Species metadata for a pokemon.
    pub async fn get_species(&self, id: u32) -> Result<RawSpecies, ApiError> {
        self.get_json(&format!("pokemon-species/{id}"), &[]).await
    }

    /// Raw evolution chain resource.
    pub async fn get_evolution_chain(&self, id: u32) -> Result<RawEvolutionChain, ApiError> {
        self.get_json(&format!("evolution-chain/{id}"), &[]).await
    }

    /// The type index, for populating filters. Entries outside the
    /// closed elemental set (the API also lists "unknown" and such) are
    /// dropped.
    pub async fn list_types(&self) -> Result<Vec<TypeName>, ApiError> {
        let list: TypeList = self.get_json("type", &[]).await?;
        Ok(list
            .results
            .iter()
            .filter_map(|entry| TypeName::from_name(&entry.name))
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(resource = path, "Fetching");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(resource = path, error = %e, "Transport failure");
                ApiError::FetchFailure {
                    resource: path.to_string(),
                    status: None,
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::FetchFailure {
                resource: path.to_string(),
                status: Some(status.as_u16()),
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            resource: path.to_string(),
            source,
        })
    }
}
