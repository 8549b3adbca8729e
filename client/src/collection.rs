//! Collection aggregation: index pages stitched together with their
//! detail records, then filtered and sorted.
//!
//! Detail fetches for a page are issued concurrently and joined
//! all-or-nothing: one failed fetch fails the whole page load.
//! Latest-query-wins guards, one per operation stream, discard any
//! load that finishes after a newer load of the same stream began, so
//! stale responses can never overwrite newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::try_join_all;

use rotodex_api::raw::pokemon::RawPokemon;
use rotodex_api::resource::NamedResource;
use rotodex_catalog::{CollectionPage, CollectionQuery, PokemonSummary};

use crate::{ApiError, Gateway};

/// Epoch counter behind the latest-query-wins guard. Each load claims
/// the next epoch; a claim is stale once any newer claim exists.
///
/// One counter per operation stream: page loads and suggestion searches
/// each guard their own stream, so a search starting mid-flight never
/// invalidates a page load.
#[derive(Default)]
struct QueryEpoch(AtomicU64);

impl QueryEpoch {
    fn claim(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, claim: u64) -> bool {
        self.0.load(Ordering::SeqCst) == claim
    }
}

/// Stitches list pages and detail records into query results.
pub struct Aggregator {
    gateway: Arc<Gateway>,
    page_epoch: QueryEpoch,
    search_epoch: QueryEpoch,
}

impl Aggregator {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            page_epoch: QueryEpoch::default(),
            search_epoch: QueryEpoch::default(),
        }
    }

    /// Paged variant: fetch one index page at the query's window,
    /// resolve every entry's detail concurrently, then filter and sort
    /// the fetched set. `total_matching` reports the upstream catalog
    /// count, since only this window was downloaded.
    ///
    /// Returns [`ApiError::Stale`] if a newer page load started
    /// meanwhile. Suggestion searches run on their own stream and do
    /// not invalidate page loads.
    pub async fn load_page(&self, query: &CollectionQuery) -> Result<CollectionPage, ApiError> {
        let claim = self.page_epoch.claim();

        let page = self.gateway.list_pokemon(query.offset(), query.page_size).await?;
        let summaries = self.resolve_entries(&page.results).await?;
        if !self.page_epoch.is_current(claim) {
            return Err(ApiError::Stale);
        }

        Ok(CollectionPage {
            items: query.filter_and_sort(&summaries),
            total_matching: page.count,
        })
    }

    /// Whole-catalog variant: one large-limit index fetch covering the
    /// target universe, details resolved concurrently. Queries are then
    /// served from the snapshot via [`CollectionQuery::apply`] with no
    /// further network.
    pub async fn load_snapshot(&self, universe_size: u32) -> Result<Vec<PokemonSummary>, ApiError> {
        let page = self.gateway.list_pokemon(0, universe_size).await?;
        self.resolve_entries(&page.results).await
    }

    /// Suggestion search: name-substring filter over the index, capped
    /// at `limit` hits, details resolved concurrently.
    ///
    /// Returns [`ApiError::Stale`] if a newer search started meanwhile.
    pub async fn search(&self, term: &str, limit: usize) -> Result<Vec<PokemonSummary>, ApiError> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let claim = self.search_epoch.claim();
        let index = self.gateway.list_pokemon(0, 1000).await?;
        let hits: Vec<NamedResource> = index
            .results
            .into_iter()
            .filter(|entry| entry.name.contains(&term))
            .take(limit)
            .collect();

        let summaries = self.resolve_entries(&hits).await?;
        if !self.search_epoch.is_current(claim) {
            return Err(ApiError::Stale);
        }
        Ok(summaries)
    }

    /// Fetch every entry's detail concurrently and flatten to summaries.
    /// All-or-nothing: the first failure fails the set.
    async fn resolve_entries(
        &self,
        entries: &[NamedResource],
    ) -> Result<Vec<PokemonSummary>, ApiError> {
        let details: Vec<RawPokemon> = try_join_all(entries.iter().map(|entry| {
            let identifier = match entry.id() {
                Some(id) => id.to_string(),
                None => entry.name.clone(),
            };
            let gateway = Arc::clone(&self.gateway);
            async move { gateway.get_detail(&identifier).await }
        }))
        .await
        .map_err(ApiError::resolution("pokemon index page"))?;

        Ok(details.iter().map(PokemonSummary::from_raw).collect())
    }
}
