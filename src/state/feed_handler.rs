//! Refresh, pagination, and tick handling.
//!
//! Refresh and load-more go through a single-slot pending fetch with a
//! simulated latency (the repository itself is synchronous). `tick`
//! completes due fetches and expires stale notices; the event loop calls
//! it on every poll timeout, passing the current instant.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::model::{CardKind, FeedCard};
use crate::state::app_state::{FetchKind, PendingFetch};
use crate::state::{AppState, NoticeLevel};

/// How close to the feed's end the last visible card must be before the
/// next page is requested.
const LOAD_MORE_MARGIN: usize = 2;

/// Begin a refresh of the current tab.
///
/// The old cards stay on screen until the fetch completes; a load-more in
/// flight is abandoned (its loading card removed). No-op while a refresh
/// is already running.
pub fn start_refresh(state: &mut AppState, now: Instant) {
    if state.refreshing {
        return;
    }
    if state.loading_more {
        state.loading_more = false;
        state.cards.retain(|card| card.kind() != CardKind::Loading);
    }
    state.refreshing = true;
    state.pending_fetch = Some(PendingFetch {
        kind: FetchKind::Refresh,
        ready_at: now + state.fetch_delay(),
    });
    info!(tab = %state.tab, "refresh started");
}

/// Request the next page when the user has scrolled near the feed's end.
///
/// `last_visible` is the highest card index with any row on screen (from
/// the layout); the trigger fires once it reaches the second-to-last
/// card. Guarded against re-entry while any fetch is in flight and
/// against exhausted tabs.
pub fn maybe_start_load_more(state: &mut AppState, last_visible: Option<usize>, now: Instant) {
    let Some(last) = last_visible else {
        return;
    };
    if state.refreshing || state.loading_more || !state.has_more || state.cards.is_empty() {
        return;
    }
    if last + LOAD_MORE_MARGIN < state.cards.len() {
        return;
    }

    state.loading_more = true;
    state.cards.push(FeedCard::loading());
    state.pending_fetch = Some(PendingFetch {
        kind: FetchKind::LoadMore,
        ready_at: now + state.fetch_delay(),
    });
    debug!(tab = %state.tab, page = state.page + 1, "load more scheduled");
}

/// Advance time-driven state: complete a due pending fetch and expire the
/// status notice.
pub fn tick(state: &mut AppState, now: Instant) {
    if let Some(pending) = state.pending_fetch {
        if pending.ready_at <= now {
            state.pending_fetch = None;
            match pending.kind {
                FetchKind::Refresh => complete_refresh(state, now),
                FetchKind::LoadMore => complete_load_more(state, now),
            }
        }
    }

    if state
        .notice
        .as_ref()
        .is_some_and(|notice| notice.is_expired(now))
    {
        state.notice = None;
    }
}

fn complete_refresh(state: &mut AppState, now: Instant) {
    state.load_first_page();
    info!(tab = %state.tab, cards = state.cards.len(), "refresh complete");
    state.show_notice("Feed refreshed", NoticeLevel::Info, now);
}

fn complete_load_more(state: &mut AppState, now: Instant) {
    state.loading_more = false;
    state.cards.retain(|card| card.kind() != CardKind::Loading);

    let next_page = state.page + 1;
    let fetched = state
        .repository
        .page(state.tab, next_page, state.page_size());

    // Pagination clones carry derived ids, so collisions only happen if
    // the same page is fetched twice; drop those instead of double-adding.
    let fresh: Vec<FeedCard> = {
        let existing: HashSet<&str> = state.cards.iter().map(|c| c.id().as_str()).collect();
        fetched
            .into_iter()
            .filter(|card| !existing.contains(card.id().as_str()))
            .collect()
    };

    if fresh.is_empty() {
        state.has_more = false;
        info!(tab = %state.tab, "feed exhausted");
        state.show_notice("You're all caught up", NoticeLevel::Info, now);
        return;
    }

    state.page = next_page;
    for card in &fresh {
        if card.is_tracked() {
            state.coordinator.track(card.id().clone(), card.kind());
        }
    }
    debug!(
        tab = %state.tab,
        page = next_page,
        added = fresh.len(),
        "page appended"
    );
    state.cards.extend(fresh);
}

// ===== Tests =====

#[cfg(test)]
#[path = "feed_handler_tests.rs"]
mod tests;
