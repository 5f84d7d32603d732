//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.
//! The scroll offset lives in content rows; the caller supplies the
//! current layout's maximum scroll so every action lands clamped.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::RowOffset;

/// Handle a scroll keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The scroll action to handle
/// * `viewport_height` - Feed-area height in rows (for page scrolling)
/// * `max_scroll` - Largest valid offset for the current layout
///
/// Non-scroll actions leave the state unchanged.
pub fn handle_scroll_action(
    state: &mut AppState,
    action: KeyAction,
    viewport_height: u16,
    max_scroll: RowOffset,
) {
    let page = viewport_height as usize;
    let target = match action {
        KeyAction::ScrollUp => state.scroll.saturating_sub(1),
        KeyAction::ScrollDown => state.scroll.saturating_add(1),
        KeyAction::PageUp => state.scroll.saturating_sub(page),
        KeyAction::PageDown => state.scroll.saturating_add(page),
        KeyAction::ScrollToTop => RowOffset::new(0),
        KeyAction::ScrollToBottom => max_scroll,
        _ => return,
    };
    state.scroll = target.min(max_scroll);
}

/// Clamp the scroll offset after a reflow (column toggle, resize, delete).
pub fn clamp_scroll(state: &mut AppState, max_scroll: RowOffset) {
    state.scroll = state.scroll.min(max_scroll);
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
