//! Exposure registry: current state per tracked card.

use std::collections::BTreeMap;

use crate::exposure::state::ExposureState;
use crate::model::{CardId, CardKind};

/// Map from card id to its current exposure state, plus cached kind
/// metadata so the selection policy can test video-capability without
/// re-deriving it from layout data.
///
/// Entries are created lazily on the first emitted transition and
/// overwritten in place on every subsequent one. Eviction is explicit:
/// the owning coordinator removes entries when their card leaves the feed
/// permanently, so the registry stays bounded by the loaded feed length.
///
/// Single logical owner (the coordinator); not designed for concurrent
/// writers. `BTreeMap` keeps iteration deterministic for the selection
/// policy's tie-break and the debug overlay.
#[derive(Debug, Default, Clone)]
pub struct ExposureRegistry {
    states: BTreeMap<CardId, ExposureState>,
    kinds: BTreeMap<CardId, CardKind>,
}

impl ExposureRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition: unconditional overwrite of the card's state,
    /// caching its kind on the way.
    pub fn record_transition(&mut self, id: CardId, state: ExposureState, kind: CardKind) {
        self.kinds.insert(id.clone(), kind);
        self.states.insert(id, state);
    }

    /// Current state of `id`, if it has ever transitioned.
    ///
    /// Callers treat `None` as `Disappeared`-equivalent.
    pub fn current_state(&self, id: &CardId) -> Option<ExposureState> {
        self.states.get(id).copied()
    }

    /// Ids currently registered as fully visible, in id order.
    pub fn fully_visible(&self) -> impl Iterator<Item = &CardId> {
        self.states
            .iter()
            .filter(|(_, state)| **state == ExposureState::FullyVisible)
            .map(|(id, _)| id)
    }

    /// Whether `id`'s cached kind is video-capable. Defaults to `false`
    /// for ids that never transitioned (nothing cached).
    pub fn is_video_capable(&self, id: &CardId) -> bool {
        self.kinds
            .get(id)
            .map(|kind| kind.is_video_capable())
            .unwrap_or(false)
    }

    /// Evict one card, returning its last state if it had one.
    pub fn remove(&mut self, id: &CardId) -> Option<ExposureState> {
        self.kinds.remove(id);
        self.states.remove(id)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.states.clear();
        self.kinds.clear();
    }

    /// All entries in id order, for the debug overlay.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, ExposureState)> {
        self.states.iter().map(|(id, state)| (id, *state))
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no card has transitioned yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

// ===== Tests =====
