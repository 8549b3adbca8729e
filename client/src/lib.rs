//! Async PokeAPI client: gateway, collection aggregation, evolution
//! chain resolution, and the two-slot comparison engine.
//!
//! ```text
//! rotodex-api (wire types)
//!        │
//! rotodex-catalog (domain types + view state)
//!        │
//!        ▼
//! rotodex-client (fetching + orchestration) ← THIS CRATE
//! ```

use thiserror::Error;

mod collection;
mod compare;
mod debounce;
mod detail;
mod evolution;
mod gateway;

pub use collection::Aggregator;
pub use compare::{ComparisonEngine, RANDOM_ID_RANGE};
pub use debounce::Debouncer;
pub use detail::load_detail;
pub use evolution::resolve_chain;
pub use gateway::{Gateway, POKEAPI_URL};

pub use rotodex_catalog::{
    CollectionPage, CollectionQuery, CompareState, EvolutionTree, PokemonDetail, PokemonSummary,
    ShareParams, SlotId, SlotState, SortField, SortOrder, StatVerdict, TypeName,
};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP failure. `status` is absent for transport errors.
    #[error("Request for {resource} failed")]
    FetchFailure {
        resource: String,
        status: Option<u16>,
    },

    /// The identifier resolved to no record (HTTP 404).
    #[error("No record found for {resource}")]
    NotFound { resource: String },

    /// The body arrived but did not decode as the expected shape.
    #[error("Invalid response body for {resource}: {source}")]
    Decode {
        resource: String,
        source: reqwest::Error,
    },

    /// A resource reference carried no usable id.
    #[error(transparent)]
    BadReference(#[from] rotodex_api::DecodeError),

    /// An aggregate load failed because a dependent fetch failed.
    #[error("Resolving {resource} failed: {source}")]
    Resolution {
        resource: String,
        #[source]
        source: Box<ApiError>,
    },

    /// A newer query was issued while this one was in flight; the
    /// result was discarded so it cannot overwrite newer state.
    #[error("Superseded by a newer query")]
    Stale,
}

impl ApiError {
    /// Wrap a dependent-fetch failure in a resolution failure for the
    /// aggregate resource being built.
    pub(crate) fn resolution(resource: impl Into<String>) -> impl FnOnce(ApiError) -> ApiError {
        let resource = resource.into();
        move |source| ApiError::Resolution {
            resource,
            source: Box::new(source),
        }
    }
}
