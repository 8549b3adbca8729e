//! Domain types and view-state logic for the Rotodex pokemon catalog.
//!
//! This crate sits between `rotodex-api` (wire format) and higher-level
//! components:
//!
//! ```text
//! rotodex-api (PokeAPI wire types)
//!        │
//!        ▼
//! rotodex-catalog (domain types + view state) ← THIS CRATE
//!        │
//!        └─> rotodex-client (fetching, aggregation, comparison)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`TypeName`] - The closed set of elemental types
//! - [`PokemonSummary`] - Flattened list/grid entry
//! - [`PokemonDetail`] - Full detail-view record
//! - [`SpeciesInfo`] - Descriptive species metadata
//! - [`EvolutionTree`] - Resolved evolution chain with per-edge triggers
//!
//! ## View State
//! - [`CollectionQuery`] - Search/filter/sort/paging configuration and
//!   its filter → sort → paginate application
//! - [`FavoritesStore`] - Durable favorites set, insertion-ordered
//! - [`SlotState`] / [`ShareParams`] - Comparison slot state and the
//!   shareable query-string encoding

pub mod compare;
pub mod evolution;
pub mod favorites;
pub mod query;
pub mod types;

pub use compare::{
    CompareState, ShareParams, SlotId, SlotState, StatVerdict, stat_difference, total_difference,
};
pub use evolution::{EvolutionEdge, EvolutionTree, EvolutionTrigger};
pub use favorites::{FavoritesBackend, FavoritesError, FavoritesStore, JsonFileBackend, MemoryBackend};
pub use query::{CollectionPage, CollectionQuery, SortField, SortOrder};
pub use types::{AbilitySlot, PokemonDetail, PokemonSummary, SpeciesInfo, Sprites, StatEntry, TypeName};
