//! Domain types flattened from the PokeAPI wire format.

mod pokemon;
mod type_name;

pub use pokemon::{AbilitySlot, PokemonDetail, PokemonSummary, SpeciesInfo, Sprites, StatEntry};
pub use type_name::TypeName;
