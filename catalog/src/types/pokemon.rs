//! Flattened pokemon records

use serde::{Deserialize, Serialize};

use rotodex_api::raw::pokemon::RawPokemon;
use rotodex_api::raw::species::RawSpecies;

use crate::evolution::EvolutionTree;
use crate::types::TypeName;

/// Flattened list/grid entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    /// Official artwork if the API has it, front sprite otherwise.
    pub image_url: Option<String>,
    pub types: Vec<TypeName>,
}

impl PokemonSummary {
    /// Flatten a detail body into a grid entry.
    ///
    /// Type names the API adds beyond the closed set are dropped.
    pub fn from_raw(raw: &RawPokemon) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            image_url: raw.sprites.best_image().map(str::to_string),
            types: raw
                .types
                .iter()
                .filter_map(|slot| TypeName::from_name(&slot.type_ref.name))
                .collect(),
        }
    }

    /// Whether this pokemon has every type in `selected` (AND semantics).
    pub fn has_all_types(&self, selected: &[TypeName]) -> bool {
        selected.iter().all(|t| self.types.contains(t))
    }
}

/// One base-stat entry, in the API's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub base: u32,
    pub effort: u32,
}

/// One ability, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    pub name: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
}

/// Full detail-view record. Fetched lazily per detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres, as the API reports it.
    pub height: u32,
    /// Hectograms, as the API reports it.
    pub weight: u32,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<String>,
    pub types: Vec<TypeName>,
    pub sprites: Sprites,
    pub species: Option<SpeciesInfo>,
    pub evolution: Option<EvolutionTree>,
}

impl PokemonDetail {
    pub fn from_raw(raw: &RawPokemon) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            height: raw.height,
            weight: raw.weight,
            stats: raw
                .stats
                .iter()
                .map(|s| StatEntry {
                    name: s.stat.name.clone(),
                    base: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
            abilities: raw
                .abilities
                .iter()
                .map(|a| AbilitySlot {
                    name: a.ability.name.clone(),
                    hidden: a.is_hidden,
                })
                .collect(),
            moves: raw.moves.iter().map(|m| m.move_ref.name.clone()).collect(),
            types: raw
                .types
                .iter()
                .filter_map(|slot| TypeName::from_name(&slot.type_ref.name))
                .collect(),
            sprites: Sprites {
                front_default: raw.sprites.front_default.clone(),
                official_artwork: raw.sprites.best_image().map(str::to_string),
            },
            species: None,
            evolution: None,
        }
    }

    /// Flatten to a grid entry (what the favorites store persists).
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id,
            name: self.name.clone(),
            image_url: self
                .sprites
                .official_artwork
                .clone()
                .or_else(|| self.sprites.front_default.clone()),
            types: self.types.clone(),
        }
    }

    /// Sum of base stats, used for comparison totals.
    pub fn stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base).sum()
    }
}

/// Descriptive species metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    pub id: u32,
    pub name: String,
    /// (language, text) pairs in API order.
    pub flavor_texts: Vec<(String, String)>,
    /// (language, genus) pairs in API order.
    pub genera: Vec<(String, String)>,
    pub growth_rate: Option<String>,
    pub habitat: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Id of the evolution chain resource, when the species has one.
    pub evolution_chain_id: Option<u32>,
}

impl SpeciesInfo {
    pub fn from_raw(raw: &RawSpecies) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            flavor_texts: raw
                .flavor_text_entries
                .iter()
                .map(|f| (f.language.name.clone(), f.flavor_text.clone()))
                .collect(),
            genera: raw
                .genera
                .iter()
                .map(|g| (g.language.name.clone(), g.genus.clone()))
                .collect(),
            growth_rate: raw.growth_rate.as_ref().map(|r| r.name.clone()),
            habitat: raw.habitat.as_ref().map(|r| r.name.clone()),
            is_legendary: raw.is_legendary,
            is_mythical: raw.is_mythical,
            evolution_chain_id: raw
                .evolution_chain
                .as_ref()
                .and_then(|c| rotodex_api::id_from_url(&c.url)),
        }
    }

    /// First flavor text recorded for a language.
    pub fn flavor_text(&self, language: &str) -> Option<&str> {
        self.flavor_texts
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, text)| text.as_str())
    }

    /// First genus recorded for a language.
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, genus)| genus.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_pikachu() -> RawPokemon {
        serde_json::from_str(
            r#"{
                "id": 25, "name": "pikachu", "height": 4, "weight": 60,
                "stats": [
                    {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                    {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
                ],
                "abilities": [
                    {"ability": {"name": "static", "url": "u"}, "is_hidden": false, "slot": 1}
                ],
                "moves": [{"move": {"name": "thunder-shock", "url": "u"}}],
                "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}],
                "sprites": {
                    "front_default": "https://sprites.example/25.png",
                    "other": {"official-artwork": {"front_default": "https://artwork.example/25.png"}}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_from_raw_prefers_artwork() {
        let summary = PokemonSummary::from_raw(&raw_pikachu());
        assert_eq!(summary.id, 25);
        assert_eq!(summary.image_url.as_deref(), Some("https://artwork.example/25.png"));
        assert_eq!(summary.types, vec![TypeName::Electric]);
    }

    #[test]
    fn test_detail_from_raw_preserves_order() {
        let detail = PokemonDetail::from_raw(&raw_pikachu());
        assert_eq!(detail.stats[0].name, "hp");
        assert_eq!(detail.stats[1].name, "attack");
        assert_eq!(detail.moves, vec!["thunder-shock".to_string()]);
        assert_eq!(detail.stat_total(), 90);
        assert!(detail.species.is_none());
        assert!(detail.evolution.is_none());
    }

    #[test]
    fn test_detail_summary_round_trip() {
        let detail = PokemonDetail::from_raw(&raw_pikachu());
        let summary = detail.summary();
        assert_eq!(summary, PokemonSummary::from_raw(&raw_pikachu()));
    }

    #[test]
    fn test_has_all_types() {
        let summary = PokemonSummary {
            id: 6,
            name: "charizard".to_string(),
            image_url: None,
            types: vec![TypeName::Fire, TypeName::Flying],
        };
        assert!(summary.has_all_types(&[TypeName::Fire]));
        assert!(summary.has_all_types(&[TypeName::Fire, TypeName::Flying]));
        assert!(!summary.has_all_types(&[TypeName::Fire, TypeName::Dragon]));
        assert!(summary.has_all_types(&[]));
    }

    #[test]
    fn test_species_language_lookup() {
        let info = SpeciesInfo {
            id: 25,
            name: "pikachu".to_string(),
            flavor_texts: vec![
                ("ja".to_string(), "text-ja".to_string()),
                ("en".to_string(), "first-en".to_string()),
                ("en".to_string(), "second-en".to_string()),
            ],
            genera: vec![("en".to_string(), "Mouse Pokemon".to_string())],
            growth_rate: None,
            habitat: None,
            is_legendary: false,
            is_mythical: false,
            evolution_chain_id: Some(10),
        };
        assert_eq!(info.flavor_text("en"), Some("first-en"));
        assert_eq!(info.genus("en"), Some("Mouse Pokemon"));
        assert_eq!(info.flavor_text("fr"), None);
    }
}
