//! Resource references and the PokeAPI URL convention.
//!
//! PokeAPI expresses links between resources as full URLs whose trailing
//! path segment is the referenced resource's numeric id, e.g.
//! `https://pokeapi.co/api/v2/pokemon-species/25/`. Parsing that
//! convention lives here and nowhere else.

use serde::Deserialize;

use crate::DecodeError;

/// A reference to another API resource: a name plus the URL it lives at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// The numeric id of the referenced resource, if the URL carries one.
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }

    /// The numeric id, or a decode error naming the offending URL.
    pub fn require_id(&self) -> Result<u32, DecodeError> {
        self.id()
            .ok_or_else(|| DecodeError::MalformedReference(self.url.clone()))
    }
}

/// Extract the numeric id from a resource URL's trailing path segment.
///
/// Returns `None` if no segment parses as a number.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
}
