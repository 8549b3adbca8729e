//! The paginated pokemon index and the per-pokemon detail body.

use serde::Deserialize;

use crate::resource::NamedResource;

/// One page of the pokemon index (`GET /pokemon?offset=..&limit=..`).
#[derive(Debug, Clone, Deserialize)]
pub struct PagedList {
    /// Total number of pokemon in the catalog, not in this page.
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Full detail body for one pokemon (`GET /pokemon/{id or name}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<RawStat>,
    pub abilities: Vec<RawAbility>,
    #[serde(default)]
    pub moves: Vec<RawMove>,
    pub types: Vec<RawTypeSlot>,
    pub sprites: RawSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbility {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

impl RawSprites {
    /// Official artwork URL if present, falling back to the front sprite.
    pub fn best_image(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}
