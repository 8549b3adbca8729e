//! Comparison slot state, stat math, and the shareable URL encoding.
//!
//! The engine itself (which fetches) lives in `rotodex-client`; this
//! module holds the state it manipulates and the derived values the
//! display needs.

use crate::types::PokemonDetail;

/// One of the two comparison positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotId {
    Slot1,
    Slot2,
}

impl SlotId {
    /// The query-string parameter this slot is mirrored into.
    pub fn param_name(&self) -> &'static str {
        match self {
            SlotId::Slot1 => "pokemon1",
            SlotId::Slot2 => "pokemon2",
        }
    }

    pub fn sibling(&self) -> SlotId {
        match self {
            SlotId::Slot1 => SlotId::Slot2,
            SlotId::Slot2 => SlotId::Slot1,
        }
    }
}

/// Contents of one comparison slot.
#[derive(Debug, Clone, Default)]
pub struct SlotState {
    pub pokemon: Option<PokemonDetail>,
    pub loading: bool,
    /// Slot-scoped error message; never affects the sibling slot.
    pub error: Option<String>,
}

impl SlotState {
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_none()
    }
}

/// Comparison selections as canonical numeric ids, mirrored to the two
/// query-string parameters so a comparison URL reproduces itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareParams {
    pub pokemon1: Option<u32>,
    pub pokemon2: Option<u32>,
}

impl ShareParams {
    pub fn get(&self, slot: SlotId) -> Option<u32> {
        match slot {
            SlotId::Slot1 => self.pokemon1,
            SlotId::Slot2 => self.pokemon2,
        }
    }

    pub fn set(&mut self, slot: SlotId, id: Option<u32>) {
        match slot {
            SlotId::Slot1 => self.pokemon1 = id,
            SlotId::Slot2 => self.pokemon2 = id,
        }
    }

    /// Encode as a query string (`pokemon1=25&pokemon2=26`). Empty slots
    /// are omitted; both empty yields an empty string.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = self.pokemon1 {
            parts.push(format!("pokemon1={id}"));
        }
        if let Some(id) = self.pokemon2 {
            parts.push(format!("pokemon2={id}"));
        }
        parts.join("&")
    }

    /// Parse from a query string. Unknown keys and non-numeric values
    /// are ignored; a leading `?` is tolerated.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let id = value.parse().ok();
            match key {
                "pokemon1" => params.pokemon1 = id,
                "pokemon2" => params.pokemon2 = id,
                _ => {}
            }
        }
        params
    }
}

/// The two slots plus the mirrored share parameters.
///
/// This is pure state; the fetching engine in `rotodex-client` drives it
/// through the lifecycle methods. Each slot is single-writer: a load
/// outcome or a clear touches exactly one slot and its parameter.
#[derive(Debug, Clone, Default)]
pub struct CompareState {
    slot1: SlotState,
    slot2: SlotState,
    share: ShareParams,
}

impl CompareState {
    pub fn slot(&self, id: SlotId) -> &SlotState {
        match id {
            SlotId::Slot1 => &self.slot1,
            SlotId::Slot2 => &self.slot2,
        }
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut SlotState {
        match id {
            SlotId::Slot1 => &mut self.slot1,
            SlotId::Slot2 => &mut self.slot2,
        }
    }

    pub fn share(&self) -> &ShareParams {
        &self.share
    }

    /// Mark a slot as loading, clearing any stale error.
    pub fn begin_load(&mut self, id: SlotId) {
        let slot = self.slot_mut(id);
        slot.loading = true;
        slot.error = None;
    }

    /// Store a fetched record and mirror its canonical id into the
    /// slot's query parameter.
    pub fn complete_load(&mut self, id: SlotId, pokemon: PokemonDetail) {
        self.share.set(id, Some(pokemon.id));
        let slot = self.slot_mut(id);
        slot.pokemon = Some(pokemon);
        slot.loading = false;
    }

    /// Record a slot-scoped failure. Previously loaded contents stay in
    /// place; the sibling slot is never touched.
    pub fn fail_load(&mut self, id: SlotId, message: impl Into<String>) {
        let slot = self.slot_mut(id);
        slot.error = Some(message.into());
        slot.loading = false;
    }

    /// Empty a slot and drop only its query parameter.
    pub fn clear(&mut self, id: SlotId) {
        *self.slot_mut(id) = SlotState::default();
        self.share.set(id, None);
    }

    /// Both records, when both slots are populated.
    pub fn both_loaded(&self) -> Option<(&PokemonDetail, &PokemonDetail)> {
        Some((self.slot1.pokemon.as_ref()?, self.slot2.pokemon.as_ref()?))
    }

    /// Per-stat difference (slot1 minus slot2), when both slots are full.
    pub fn stat_difference(&self, index: usize) -> Option<i64> {
        let (a, b) = self.both_loaded()?;
        stat_difference(a, b, index)
    }

    /// Total-stat difference (slot1 minus slot2), when both slots are full.
    pub fn total_difference(&self) -> Option<i64> {
        let (a, b) = self.both_loaded()?;
        Some(total_difference(a, b))
    }
}

/// Three-way classification of a stat difference, derived for display
/// and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatVerdict {
    Higher,
    Lower,
    Equal,
}

impl StatVerdict {
    pub fn from_difference(diff: i64) -> Self {
        match diff.cmp(&0) {
            std::cmp::Ordering::Greater => StatVerdict::Higher,
            std::cmp::Ordering::Less => StatVerdict::Lower,
            std::cmp::Ordering::Equal => StatVerdict::Equal,
        }
    }
}

/// `slot1.stats[index].base - slot2.stats[index].base`, if both slots
/// carry that stat.
pub fn stat_difference(slot1: &PokemonDetail, slot2: &PokemonDetail, index: usize) -> Option<i64> {
    let a = slot1.stats.get(index)?;
    let b = slot2.stats.get(index)?;
    Some(i64::from(a.base) - i64::from(b.base))
}

/// Difference of base-stat totals, slot1 minus slot2.
pub fn total_difference(slot1: &PokemonDetail, slot2: &PokemonDetail) -> i64 {
    i64::from(slot1.stat_total()) - i64::from(slot2.stat_total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sprites, StatEntry};

    fn detail(id: u32, name: &str, bases: &[u32]) -> PokemonDetail {
        PokemonDetail {
            id,
            name: name.to_string(),
            height: 0,
            weight: 0,
            stats: bases
                .iter()
                .enumerate()
                .map(|(i, base)| StatEntry {
                    name: format!("stat-{i}"),
                    base: *base,
                    effort: 0,
                })
                .collect(),
            abilities: vec![],
            moves: vec![],
            types: vec![],
            sprites: Sprites::default(),
            species: None,
            evolution: None,
        }
    }

    #[test]
    fn test_stat_difference() {
        let a = detail(25, "pikachu", &[35, 55]);
        let b = detail(26, "raichu", &[60, 90]);
        assert_eq!(stat_difference(&a, &b, 0), Some(-25));
        assert_eq!(stat_difference(&a, &b, 1), Some(-35));
        assert_eq!(stat_difference(&a, &b, 5), None);
    }

    #[test]
    fn test_total_difference_and_verdict() {
        let a = detail(25, "pikachu", &[35, 55]);
        let b = detail(26, "raichu", &[60, 90]);
        let diff = total_difference(&a, &b);
        assert_eq!(diff, -60);
        assert_eq!(StatVerdict::from_difference(diff), StatVerdict::Lower);
        assert_eq!(StatVerdict::from_difference(-diff), StatVerdict::Higher);
        assert_eq!(StatVerdict::from_difference(0), StatVerdict::Equal);
    }

    #[test]
    fn test_share_params_round_trip() {
        let params = ShareParams {
            pokemon1: Some(25),
            pokemon2: Some(26),
        };
        let query = params.to_query_string();
        assert_eq!(query, "pokemon1=25&pokemon2=26");
        assert_eq!(ShareParams::from_query_string(&query), params);
    }

    #[test]
    fn test_share_params_single_slot() {
        let params = ShareParams {
            pokemon1: None,
            pokemon2: Some(26),
        };
        assert_eq!(params.to_query_string(), "pokemon2=26");
        assert_eq!(ShareParams::from_query_string("pokemon2=26"), params);
    }

    #[test]
    fn test_share_params_ignores_noise() {
        let params = ShareParams::from_query_string("?tab=stats&pokemon1=25&pokemon2=abc");
        assert_eq!(params.pokemon1, Some(25));
        assert_eq!(params.pokemon2, None);
        assert_eq!(ShareParams::from_query_string(""), ShareParams::default());
    }

    #[test]
    fn test_clear_slot_leaves_sibling_untouched() {
        let mut state = CompareState::default();
        state.begin_load(SlotId::Slot1);
        state.complete_load(SlotId::Slot1, detail(25, "pikachu", &[35]));
        state.begin_load(SlotId::Slot2);
        state.complete_load(SlotId::Slot2, detail(26, "raichu", &[60]));
        assert_eq!(state.share().to_query_string(), "pokemon1=25&pokemon2=26");

        state.clear(SlotId::Slot1);
        assert!(state.slot(SlotId::Slot1).is_empty());
        assert_eq!(
            state.slot(SlotId::Slot2).pokemon.as_ref().unwrap().name,
            "raichu"
        );
        assert_eq!(state.share().to_query_string(), "pokemon2=26");
    }

    #[test]
    fn test_fail_load_is_slot_scoped() {
        let mut state = CompareState::default();
        state.complete_load(SlotId::Slot2, detail(26, "raichu", &[60]));

        state.begin_load(SlotId::Slot1);
        assert!(state.slot(SlotId::Slot1).loading);
        state.fail_load(SlotId::Slot1, "Pokemon not found");

        let slot1 = state.slot(SlotId::Slot1);
        assert!(!slot1.loading);
        assert_eq!(slot1.error.as_deref(), Some("Pokemon not found"));
        assert!(state.slot(SlotId::Slot2).error.is_none());
        // A failed load never mirrors anything into the URL.
        assert_eq!(state.share().pokemon1, None);
    }

    #[test]
    fn test_begin_load_clears_previous_error() {
        let mut state = CompareState::default();
        state.fail_load(SlotId::Slot1, "oops");
        state.begin_load(SlotId::Slot1);
        assert!(state.slot(SlotId::Slot1).error.is_none());
        assert!(state.slot(SlotId::Slot1).loading);
    }

    #[test]
    fn test_compare_state_differences() {
        let mut state = CompareState::default();
        assert_eq!(state.total_difference(), None);

        state.complete_load(SlotId::Slot1, detail(25, "pikachu", &[35, 55]));
        state.complete_load(SlotId::Slot2, detail(26, "raichu", &[60, 90]));
        assert_eq!(state.stat_difference(0), Some(-25));
        assert_eq!(state.total_difference(), Some(-60));
    }

    #[test]
    fn test_slot_param_names() {
        assert_eq!(SlotId::Slot1.param_name(), "pokemon1");
        assert_eq!(SlotId::Slot2.param_name(), "pokemon2");
        assert_eq!(SlotId::Slot1.sibling(), SlotId::Slot2);
    }
}
