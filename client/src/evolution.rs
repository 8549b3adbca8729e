//! Evolution chain resolution.
//!
//! Walks the raw chain structurally (no fixed-depth assumptions),
//! fetching one detail record per species for artwork and resolving
//! every node's children concurrently. Any descendant failure fails the
//! whole resolution; there are no partial trees.

use futures_util::future::{BoxFuture, try_join_all};

use rotodex_api::raw::evolution::{ChainLink, EvolutionDetail, RawEvolutionChain};
use rotodex_catalog::{EvolutionEdge, EvolutionTree, EvolutionTrigger};

use crate::{ApiError, Gateway};

/// Resolve a raw chain into a display-ready [`EvolutionTree`].
pub async fn resolve_chain(
    gateway: &Gateway,
    chain: &RawEvolutionChain,
) -> Result<EvolutionTree, ApiError> {
    resolve_link(gateway, &chain.chain)
        .await
        .map_err(ApiError::resolution(format!("evolution-chain/{}", chain.id)))
}

/// Per-species artwork lookup, the one fetch the resolver needs. The
/// seam keeps the recursion testable without a network.
pub(crate) trait ArtworkSource: Sync {
    fn artwork(&self, species_id: u32) -> BoxFuture<'_, Result<Option<String>, ApiError>>;
}

impl ArtworkSource for Gateway {
    fn artwork(&self, species_id: u32) -> BoxFuture<'_, Result<Option<String>, ApiError>> {
        Box::pin(async move {
            let detail = self.get_detail(&species_id.to_string()).await?;
            Ok(detail.sprites.best_image().map(str::to_string))
        })
    }
}

/// Recursion is boxed: the future type would otherwise be infinite.
fn resolve_link<'a, S: ArtworkSource>(
    source: &'a S,
    link: &'a ChainLink,
) -> BoxFuture<'a, Result<EvolutionTree, ApiError>> {
    Box::pin(async move {
        let species_id = link.species.require_id()?;
        let artwork_url = source.artwork(species_id).await?;

        // Children resolve concurrently; one failure fails the level.
        let children = try_join_all(
            link.evolves_to
                .iter()
                .map(|child| resolve_link(source, child)),
        )
        .await?;

        let evolves_to = children
            .into_iter()
            .zip(&link.evolves_to)
            .map(|(node, raw_child)| EvolutionEdge {
                // Only the first recorded condition becomes the trigger;
                // alternates stay available on the wire type.
                trigger: raw_child.evolution_details.first().map(trigger_from_detail),
                node,
            })
            .collect();

        Ok(EvolutionTree {
            species_id,
            species_name: link.species.name.clone(),
            artwork_url,
            evolves_to,
        })
    })
}

fn trigger_from_detail(detail: &EvolutionDetail) -> EvolutionTrigger {
    EvolutionTrigger {
        min_level: detail.min_level,
        kind: detail.trigger.as_ref().map(|t| t.name.clone()),
        item: detail.item.as_ref().map(|i| i.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotodex_api::NamedResource;

    /// Serves canned artwork, erroring for one designated species.
    struct FakeArtwork {
        failing_id: Option<u32>,
    }

    impl ArtworkSource for FakeArtwork {
        fn artwork(&self, species_id: u32) -> BoxFuture<'_, Result<Option<String>, ApiError>> {
            Box::pin(async move {
                if self.failing_id == Some(species_id) {
                    return Err(ApiError::NotFound {
                        resource: format!("pokemon/{species_id}"),
                    });
                }
                Ok(Some(format!("https://artwork.example/{species_id}.png")))
            })
        }
    }

    fn species(id: u32, name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
        }
    }

    fn level_detail(level: u32) -> EvolutionDetail {
        EvolutionDetail {
            min_level: Some(level),
            trigger: Some(NamedResource {
                name: "level-up".to_string(),
                url: String::new(),
            }),
            item: None,
        }
    }

    /// A → B → C with a level trigger at each edge.
    fn three_stage_link() -> ChainLink {
        ChainLink {
            species: species(1, "bulbasaur"),
            evolution_details: vec![],
            evolves_to: vec![ChainLink {
                species: species(2, "ivysaur"),
                evolution_details: vec![level_detail(16)],
                evolves_to: vec![ChainLink {
                    species: species(3, "venusaur"),
                    evolution_details: vec![level_detail(32)],
                    evolves_to: vec![],
                }],
            }],
        }
    }

    #[tokio::test]
    async fn test_resolve_depth_three_chain() {
        let source = FakeArtwork { failing_id: None };
        let tree = resolve_link(&source, &three_stage_link()).await.unwrap();

        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.edge_count(), 2);
        assert_eq!(tree.species_name, "bulbasaur");
        assert_eq!(tree.artwork_url.as_deref(), Some("https://artwork.example/1.png"));

        let first_edge = &tree.evolves_to[0];
        assert_eq!(first_edge.trigger.as_ref().unwrap().min_level, Some(16));
        let second_edge = &first_edge.node.evolves_to[0];
        assert_eq!(second_edge.trigger.as_ref().unwrap().min_level, Some(32));
        assert!(second_edge.node.is_leaf());
    }

    #[tokio::test]
    async fn test_first_detail_entry_becomes_trigger() {
        let mut link = three_stage_link();
        // An alternate condition on the first edge is discarded.
        link.evolves_to[0].evolution_details.push(EvolutionDetail {
            min_level: None,
            trigger: Some(NamedResource {
                name: "trade".to_string(),
                url: String::new(),
            }),
            item: None,
        });

        let source = FakeArtwork { failing_id: None };
        let tree = resolve_link(&source, &link).await.unwrap();
        let trigger = tree.evolves_to[0].trigger.as_ref().unwrap();
        assert_eq!(trigger.min_level, Some(16));
        assert_eq!(trigger.kind.as_deref(), Some("level-up"));
    }

    #[tokio::test]
    async fn test_descendant_failure_fails_whole_tree() {
        let source = FakeArtwork { failing_id: Some(3) };
        let result = resolve_link(&source, &three_stage_link()).await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_malformed_species_reference_fails() {
        let mut link = three_stage_link();
        link.species.url = "https://pokeapi.co/api/v2/pokemon-species/bulbasaur/".to_string();

        let source = FakeArtwork { failing_id: None };
        let result = resolve_link(&source, &link).await;
        assert!(matches!(result, Err(ApiError::BadReference(_))));
    }

    #[tokio::test]
    async fn test_edge_without_details_has_no_trigger() {
        let link = ChainLink {
            species: species(132, "ditto"),
            evolution_details: vec![],
            evolves_to: vec![ChainLink {
                species: species(133, "eevee"),
                evolution_details: vec![],
                evolves_to: vec![],
            }],
        };

        let source = FakeArtwork { failing_id: None };
        let tree = resolve_link(&source, &link).await.unwrap();
        assert!(tree.evolves_to[0].trigger.is_none());
    }
}
