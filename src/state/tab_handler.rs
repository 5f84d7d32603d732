//! Tab navigation keyboard action handler.
//!
//! Pure functions that transform AppState in response to tab navigation.
//! Switching tabs is a full feed reload: page one of the target tab,
//! scroll reset, and a fresh exposure tracking session (everything from
//! the old tab is evicted).

use tracing::info;

use crate::model::{FeedTab, KeyAction};
use crate::state::AppState;

/// Handle a tab navigation keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The tab navigation action to handle
///
/// Out-of-range `SelectTab` indices and non-tab actions leave the state
/// unchanged.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction) {
    let target = match action {
        KeyAction::NextTab => state.tab.next(),
        KeyAction::PrevTab => state.tab.prev(),
        KeyAction::SelectTab(index) => match FeedTab::from_index(index) {
            Some(tab) => tab,
            None => return,
        },
        _ => return,
    };
    switch_tab(state, target);
}

/// Switch to `target`, reloading its first page. Selecting the current
/// tab again is a no-op so an idle finger on the tab key cannot reset
/// scroll position or playback.
pub fn switch_tab(state: &mut AppState, target: FeedTab) {
    if target == state.tab {
        return;
    }
    state.tab = target;
    state.pending_delete = None;
    state.load_first_page();
    info!(tab = %target, cards = state.cards.len(), "switched tab");
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
