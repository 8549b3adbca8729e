//! Composed detail loading: detail + species + resolved evolution chain.

use rotodex_catalog::{PokemonDetail, SpeciesInfo};

use crate::{ApiError, Gateway, evolution};

/// Load the full detail view for one pokemon.
///
/// Fetches the detail record, its species metadata, and, when the
/// species references one, the resolved evolution chain. Nothing is
/// cached; the calling layer decides whether to keep the result across
/// navigations.
pub async fn load_detail(gateway: &Gateway, id_or_name: &str) -> Result<PokemonDetail, ApiError> {
    let raw = gateway.get_detail(id_or_name).await?;
    let mut detail = PokemonDetail::from_raw(&raw);

    let species = SpeciesInfo::from_raw(&gateway.get_species(raw.id).await?);
    let chain_id = species.evolution_chain_id;
    detail.species = Some(species);

    if let Some(chain_id) = chain_id {
        let raw_chain = gateway.get_evolution_chain(chain_id).await?;
        detail.evolution = Some(evolution::resolve_chain(gateway, &raw_chain).await?);
    }

    Ok(detail)
}
