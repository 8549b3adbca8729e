//! Evolution chain body (`GET /evolution-chain/{id}`).
//!
//! The chain is a recursive structure: each link names a species and
//! carries the links it evolves into, with zero or more detail entries
//! describing the conditions for that step.

use serde::Deserialize;

use crate::resource::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    /// Conditions for evolving INTO this link. Alternate conditions
    /// appear as additional entries.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: Option<NamedResource>,
    pub item: Option<NamedResource>,
}
