//! Autoplay selection policy.

use crate::exposure::registry::ExposureRegistry;
use crate::exposure::snapshot::LayoutSnapshot;
use crate::exposure::state::ExposureState;
use crate::model::CardId;

/// Pick which single card (if any) should be playing.
///
/// Policy: among cards registered fully visible AND video-capable, choose
/// the one materialized topmost in the snapshot. Tie-break, in order:
/// smaller scroll-axis offset, then smaller lane index, then
/// lexicographically smaller id — a total order, so selection is
/// deterministic even when two lanes align exactly.
///
/// `None` (no qualifying card) is a normal steady state, not an error.
///
/// Pure function: reads the registry and snapshot, mutates nothing.
/// "Topmost fully-visible video" approximates "the video the user is
/// looking at" without needing viewport-center distance, and full
/// visibility is a strict condition, which keeps the choice stable while
/// scrolling.
pub fn select_playing(registry: &ExposureRegistry, snapshot: &LayoutSnapshot) -> Option<CardId> {
    snapshot
        .items()
        .iter()
        .filter(|item| {
            registry.current_state(item.id()) == Some(ExposureState::FullyVisible)
                && registry.is_video_capable(item.id())
        })
        .min_by_key(|item| (item.offset(), item.lane(), item.id().clone()))
        .map(|item| item.id().clone())
}

// ===== Tests =====
