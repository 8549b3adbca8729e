//! Two-slot comparison engine.
//!
//! Each slot loads independently; a failure is scoped to its slot and
//! never disturbs the sibling. Loaded selections are mirrored into the
//! share parameters so a comparison URL reproduces itself.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use rotodex_catalog::{CompareState, PokemonDetail, ShareParams, SlotId, SlotState, StatVerdict};

use crate::{ApiError, Debouncer, Gateway};

/// Valid id range for [`ComparisonEngine::randomize_slot`].
pub const RANDOM_ID_RANGE: RangeInclusive<u32> = 1..=1000;

const RANDOMIZE_WINDOW: Duration = Duration::from_millis(300);

pub struct ComparisonEngine {
    gateway: Arc<Gateway>,
    state: CompareState,
    debouncer: Debouncer,
}

impl ComparisonEngine {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            state: CompareState::default(),
            debouncer: Debouncer::new(RANDOMIZE_WINDOW),
        }
    }

    pub fn slot(&self, id: SlotId) -> &SlotState {
        self.state.slot(id)
    }

    /// Current selections as shareable query parameters.
    pub fn share_params(&self) -> &ShareParams {
        self.state.share()
    }

    /// Load a pokemon into a slot by id or name (case-insensitive).
    ///
    /// On success the canonical numeric id is mirrored into the slot's
    /// query parameter. On failure the slot gets an error message and
    /// nothing else changes.
    pub async fn load_slot(&mut self, slot: SlotId, id_or_name: &str) {
        self.state.begin_load(slot);
        match self.gateway.get_detail(id_or_name).await {
            Ok(raw) => {
                self.state.complete_load(slot, PokemonDetail::from_raw(&raw));
            }
            Err(ApiError::NotFound { .. }) => {
                self.state
                    .fail_load(slot, "Pokémon not found. Please try another name or ID.");
            }
            Err(e) => {
                tracing::warn!(slot = slot.param_name(), error = %e, "Slot load failed");
                self.state.fail_load(slot, "Failed to load Pokémon.");
            }
        }
    }

    /// Empty a slot and drop only its query parameter.
    pub fn clear_slot(&mut self, slot: SlotId) {
        self.state.clear(slot);
    }

    /// Load a uniformly random pokemon into a slot.
    ///
    /// Debounced: rapid repeated calls collapse so only the most recent
    /// one within the window executes. Returns false if this call was
    /// superseded.
    pub async fn randomize_slot(&mut self, slot: SlotId) -> bool {
        if !self.debouncer.acquire().await {
            return false;
        }
        let id = rand::thread_rng().gen_range(RANDOM_ID_RANGE);
        self.load_slot(slot, &id.to_string()).await;
        true
    }

    /// Reload both slots from shared URL parameters.
    pub async fn hydrate(&mut self, params: &ShareParams) {
        for slot in [SlotId::Slot1, SlotId::Slot2] {
            if let Some(id) = params.get(slot) {
                self.load_slot(slot, &id.to_string()).await;
            }
        }
    }

    /// Per-stat difference (slot1 minus slot2), when both slots are full.
    pub fn stat_difference(&self, index: usize) -> Option<i64> {
        self.state.stat_difference(index)
    }

    /// Per-stat verdict for display.
    pub fn stat_verdict(&self, index: usize) -> Option<StatVerdict> {
        self.stat_difference(index).map(StatVerdict::from_difference)
    }

    /// Total-stat difference (slot1 minus slot2), when both slots are full.
    pub fn total_difference(&self) -> Option<i64> {
        self.state.total_difference()
    }
}
