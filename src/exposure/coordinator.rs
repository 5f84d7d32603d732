//! Playback coordinator: tracks exposure transitions and owns the playing id.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::exposure::geometry::visible_fraction;
use crate::exposure::registry::ExposureRegistry;
use crate::exposure::selector::select_playing;
use crate::exposure::snapshot::LayoutSnapshot;
use crate::exposure::state::ExposureState;
use crate::model::{CardId, CardKind};

// ===== Events =====

/// One emitted exposure transition (distinct-until-changed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureTransition {
    /// Card that crossed a threshold.
    pub id: CardId,
    /// Last-emitted state (`Disappeared` baseline for first observation).
    pub from: ExposureState,
    /// Newly classified state.
    pub to: ExposureState,
}

/// Notification that the playing card changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackChange {
    /// Previously playing card, if any.
    pub previous: Option<CardId>,
    /// Newly playing card, if any.
    pub current: Option<CardId>,
}

/// Everything one [`PlaybackCoordinator::observe`] call produced, in
/// processing order. The shell logs transitions and restarts the playback
/// countdown on changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObserveReport {
    /// Emitted exposure transitions.
    pub transitions: Vec<ExposureTransition>,
    /// Playback-change notifications (usually zero or one).
    pub playback_changes: Vec<PlaybackChange>,
}

impl ObserveReport {
    /// True when the snapshot produced no transitions and no playback
    /// change — the steady state while idle or scrolling within bands.
    pub fn is_quiet(&self) -> bool {
        self.transitions.is_empty() && self.playback_changes.is_empty()
    }
}

// ===== PlaybackCoordinator =====

/// Owns the exposure registry, the tracked-card set, and the playing id
/// for one feed list. One instance per independent list; nothing here is
/// global.
///
/// Per snapshot, [`observe`](Self::observe) samples every tracked card
/// (absent cards count as fraction 0), emits distinct-until-changed
/// transitions, and re-runs the autoplay selector after each one. The
/// playing id changes only when the selector output changes — repeated
/// identical selections are idempotent, so playback is never restarted by
/// mere scrolling.
#[derive(Debug, Default)]
pub struct PlaybackCoordinator {
    registry: ExposureRegistry,
    tracked: BTreeMap<CardId, CardKind>,
    playing: Option<CardId>,
    last_frame: Option<u64>,
}

impl PlaybackCoordinator {
    /// Coordinator with nothing tracked and nothing playing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a card. Idempotent; re-tracking refreshes the cached
    /// kind. No registry entry is created until the first emitted
    /// transition.
    pub fn track(&mut self, id: CardId, kind: CardKind) {
        self.tracked.insert(id, kind);
    }

    /// Stop tracking a card that left the feed permanently (delete,
    /// refresh, tab switch) and evict its registry entry.
    ///
    /// If the card was playing, playback stops immediately and the change
    /// is returned; the next `observe` may select a successor.
    pub fn untrack(&mut self, id: &CardId) -> Option<PlaybackChange> {
        self.tracked.remove(id);
        self.registry.remove(id);
        if self.playing.as_ref() == Some(id) {
            let change = PlaybackChange {
                previous: self.playing.take(),
                current: None,
            };
            debug!(card = %id, "playback stopped: card evicted");
            return Some(change);
        }
        None
    }

    /// Drop all tracking state (tab switch, refresh). Returns the playback
    /// change if something was playing.
    pub fn reset(&mut self) -> Option<PlaybackChange> {
        self.tracked.clear();
        self.registry.clear();
        self.playing.take().map(|previous| {
            debug!(card = %previous, "playback stopped: list reset");
            PlaybackChange {
                previous: Some(previous),
                current: None,
            }
        })
    }

    /// Process one layout snapshot.
    ///
    /// Tracked cards materialized in the snapshot are sampled in snapshot
    /// order; tracked cards absent from it classify as `Disappeared` (in
    /// id order). Each emitted transition updates the registry and re-runs
    /// the selector, so a single snapshot can yield several transitions
    /// and, transiently, several playback changes.
    ///
    /// Snapshots older than the newest observed frame are discarded
    /// (last-snapshot-wins); re-delivery of the same frame is harmless
    /// because emission is distinct-until-changed.
    pub fn observe(&mut self, snapshot: &LayoutSnapshot) -> ObserveReport {
        if let Some(last) = self.last_frame {
            if snapshot.frame() < last {
                trace!(
                    frame = snapshot.frame(),
                    newest = last,
                    "discarding stale layout snapshot"
                );
                return ObserveReport::default();
            }
        }
        self.last_frame = Some(snapshot.frame());

        let mut report = ObserveReport::default();

        for item in snapshot.items() {
            let Some(kind) = self.tracked.get(item.id()).copied() else {
                continue; // Not tracked (e.g. the loading indicator).
            };
            let fraction = visible_fraction(item, snapshot);
            let next = ExposureState::classify(fraction);
            self.apply(item.id().clone(), next, kind, snapshot, &mut report);
        }

        // Tracked but not materialized: fully scrolled out.
        let absent: Vec<(CardId, CardKind)> = self
            .tracked
            .iter()
            .filter(|(id, _)| !snapshot.contains(id))
            .map(|(id, kind)| (id.clone(), *kind))
            .collect();
        for (id, kind) in absent {
            self.apply(id, ExposureState::Disappeared, kind, snapshot, &mut report);
        }

        self.debug_check_playing_invariant();
        report
    }

    /// Currently playing card, if any.
    pub fn playing(&self) -> Option<&CardId> {
        self.playing.as_ref()
    }

    /// Read access to the registry (debug overlay, tests).
    pub fn registry(&self) -> &ExposureRegistry {
        &self.registry
    }

    /// Whether `id` is currently tracked.
    pub fn is_tracked(&self, id: &CardId) -> bool {
        self.tracked.contains_key(id)
    }

    /// Number of tracked cards.
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    /// Distinct-until-changed emission plus per-transition reselection.
    fn apply(
        &mut self,
        id: CardId,
        next: ExposureState,
        kind: CardKind,
        snapshot: &LayoutSnapshot,
        report: &mut ObserveReport,
    ) {
        // Implicit baseline: a card with no registry entry was never
        // emitted, so it counts as Disappeared. Its first Disappeared
        // classification creates no entry and no event.
        let last = self
            .registry
            .current_state(&id)
            .unwrap_or(ExposureState::Disappeared);
        if next == last {
            return;
        }

        self.registry.record_transition(id.clone(), next, kind);
        debug!(card = %id, from = %last, to = %next, "exposure transition");
        report.transitions.push(ExposureTransition {
            id,
            from: last,
            to: next,
        });

        let selected = select_playing(&self.registry, snapshot);
        if selected != self.playing {
            let change = PlaybackChange {
                previous: self.playing.clone(),
                current: selected.clone(),
            };
            match (&change.previous, &change.current) {
                (Some(prev), Some(next)) => debug!(from = %prev, to = %next, "playback switched"),
                (None, Some(next)) => debug!(card = %next, "playback started"),
                (Some(prev), None) => debug!(card = %prev, "playback stopped"),
                (None, None) => {}
            }
            self.playing = selected;
            report.playback_changes.push(change);
        }
    }

    /// If something is playing it must be registered fully visible and
    /// video-capable. Holds by construction of the selector; checked in
    /// debug builds only.
    fn debug_check_playing_invariant(&self) {
        if let Some(playing) = &self.playing {
            debug_assert_eq!(
                self.registry.current_state(playing),
                Some(ExposureState::FullyVisible),
                "playing card must be fully visible"
            );
            debug_assert!(
                self.registry.is_video_capable(playing),
                "playing card must be video-capable"
            );
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
