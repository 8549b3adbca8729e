//! Species body (`GET /pokemon-species/{id}`): descriptive metadata and
//! the evolution chain reference.

use serde::Deserialize;

use crate::resource::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<RawFlavorText>,
    #[serde(default)]
    pub genera: Vec<RawGenus>,
    pub growth_rate: Option<NamedResource>,
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolution_chain: Option<ChainReference>,
}

/// Bare URL reference to the species' evolution chain resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainReference {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGenus {
    pub genus: String,
    pub language: NamedResource,
}
