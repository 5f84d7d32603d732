//! Delete-with-confirmation flow.
//!
//! Clicking a card opens a confirmation dialog for its id; confirming
//! removes the card from the repository templates (when it is one), from
//! the on-screen feed, and from exposure tracking. Pagination clones only
//! exist in app state, so deleting one never touches the repository.

use std::time::Instant;

use tracing::info;

use crate::model::CardId;
use crate::state::{AppState, NoticeLevel};

/// Open the confirmation dialog for `id`. Replaces any dialog already
/// open for another card.
pub fn request_delete(state: &mut AppState, id: CardId) {
    state.pending_delete = Some(id);
}

/// Close the dialog without deleting.
pub fn cancel_delete(state: &mut AppState) {
    state.pending_delete = None;
}

/// Delete the card awaiting confirmation. No-op when no dialog is open.
pub fn confirm_delete(state: &mut AppState, now: Instant) {
    let Some(id) = state.pending_delete.take() else {
        return;
    };

    let removed_template = state.repository.delete(&id);
    let before = state.cards.len();
    state.cards.retain(|card| card.id() != &id);
    let removed_from_feed = state.cards.len() < before;

    if let Some(change) = state.coordinator.untrack(&id) {
        state.apply_playback_change(&change, now);
    }

    if removed_from_feed || removed_template {
        info!(card = %id, removed_template, "card deleted");
        state.show_notice(format!("Deleted {id}"), NoticeLevel::Info, now);
    } else {
        state.show_notice(format!("{id} is already gone"), NoticeLevel::Error, now);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "delete_handler_tests.rs"]
mod tests;
