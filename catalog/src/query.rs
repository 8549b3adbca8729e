//! Collection query configuration and its application.
//!
//! A [`CollectionQuery`] captures everything the catalog view can ask
//! for: a search term, a set of required types, a sort, and a page
//! window. [`CollectionQuery::apply`] runs the fixed pipeline
//! filter → sort → paginate over an already-fetched set of summaries.

use crate::types::{PokemonSummary, TypeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter/sort/paging configuration.
///
/// Invariant: changing the search term, the type selection, or the page
/// size resets `page` to 1. Use the mutators rather than writing fields
/// to keep that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    pub search_term: String,
    pub selected_types: Vec<TypeName>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for CollectionQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_types: Vec::new(),
            sort_field: SortField::Id,
            sort_order: SortOrder::Asc,
            page: 1,
            page_size: 20,
        }
    }
}

/// One page of query results plus the size of the full filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage {
    pub items: Vec<PokemonSummary>,
    pub total_matching: u32,
}

impl CollectionQuery {
    /// Replace the search term. Resets to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Add or remove a type from the selection. Resets to page 1.
    pub fn toggle_type(&mut self, ty: TypeName) {
        if let Some(pos) = self.selected_types.iter().position(|t| *t == ty) {
            self.selected_types.remove(pos);
        } else {
            self.selected_types.push(ty);
        }
        self.page = 1;
    }

    /// Change the page size. Resets to page 1.
    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_field = field;
        self.sort_order = order;
    }

    /// Zero-based offset of this query's page window. A page written
    /// directly as 0 is treated as page 1.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.page_size
    }

    /// Number of pages a filtered set of `total` items spans.
    pub fn total_pages(&self, total: u32) -> u32 {
        total.div_ceil(self.page_size.max(1))
    }

    /// Does a summary pass the search term and type filters?
    ///
    /// Search matches case-insensitively on a name substring, or exactly
    /// on the decimal id. Types use AND semantics: the pokemon must carry
    /// every selected type.
    pub fn matches(&self, summary: &PokemonSummary) -> bool {
        if !summary.has_all_types(&self.selected_types) {
            return false;
        }
        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }
        summary.name.to_lowercase().contains(&term.to_lowercase())
            || summary.id.to_string() == term
    }

    /// Sort a filtered set in place according to this query.
    pub fn sort(&self, items: &mut [PokemonSummary]) {
        items.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Name => a.name.cmp(&b.name),
            };
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    /// Run filter → sort → paginate over an already-fetched snapshot.
    ///
    /// An empty page is a valid result, not an error.
    pub fn apply(&self, universe: &[PokemonSummary]) -> CollectionPage {
        let mut matching: Vec<PokemonSummary> =
            universe.iter().filter(|s| self.matches(s)).cloned().collect();
        self.sort(&mut matching);

        let total_matching = matching.len() as u32;
        let start = (self.offset() as usize).min(matching.len());
        let end = (start + self.page_size as usize).min(matching.len());
        CollectionPage {
            items: matching[start..end].to_vec(),
            total_matching,
        }
    }

    /// Filter and sort only, no page slicing. Used by the paged loader,
    /// where the network fetch already bounded the window.
    pub fn filter_and_sort(&self, universe: &[PokemonSummary]) -> Vec<PokemonSummary> {
        let mut matching: Vec<PokemonSummary> =
            universe.iter().filter(|s| self.matches(s)).cloned().collect();
        self.sort(&mut matching);
        matching
    }
}
