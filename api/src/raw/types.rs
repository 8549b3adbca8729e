//! Type index body (`GET /type`), used to populate the filter UI.

use serde::Deserialize;

use crate::resource::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct TypeList {
    pub count: u32,
    pub results: Vec<NamedResource>,
}
