use thiserror::Error;

pub mod raw;
pub mod resource;

pub use raw::evolution::{ChainLink, EvolutionDetail, RawEvolutionChain};
pub use raw::pokemon::{PagedList, RawPokemon};
pub use raw::species::RawSpecies;
pub use raw::types::TypeList;
pub use resource::{NamedResource, id_from_url};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Resource reference has no numeric id: {0}")]
    MalformedReference(String),
}
