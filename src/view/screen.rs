//! Whole-frame composition: chrome split plus widget dispatch.

use crate::state::AppState;
use crate::view::constants::{STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::styles::CardStyles;
use crate::view::{cards, dialog, help, status, tabs};
use crate::view_state::FeedLayout;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Screen regions produced by the fixed vertical chrome split.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenAreas {
    /// Tab bar strip at the top.
    pub(crate) tabs: Rect,
    /// Scrollable feed pane.
    pub(crate) feed: Rect,
    /// One-row status line at the bottom.
    pub(crate) status: Rect,
}

/// Split a frame into tab bar, feed pane, and status line.
pub(crate) fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        tabs: chunks[0],
        feed: chunks[1],
        status: chunks[2],
    }
}

/// Render one full frame from the current state and its layout.
///
/// `layout` must be the layout the caller measured for this frame; the
/// exposure snapshot the caller observed was sampled from the same one,
/// so what the coordinator saw is exactly what gets drawn.
pub(crate) fn render_screen(
    frame: &mut Frame,
    state: &AppState,
    layout: &FeedLayout,
    countdown: Option<u64>,
) {
    let styles = CardStyles::new();
    let areas = screen_areas(frame.area());

    tabs::render_tab_bar(frame, areas.tabs, state.tab, &styles);
    cards::render_feed(frame, areas.feed, state, layout, countdown, &styles);
    status::render_status_bar(frame, areas.status, state, &styles);

    if let Some(id) = state.pending_delete() {
        dialog::render_delete_dialog(frame, frame.area(), id, &styles);
    }
    if state.help_visible {
        help::render_help_overlay(frame, &styles);
    }
    #[cfg(feature = "debug-overlay")]
    crate::view::debug_overlay::render_debug_overlay(frame, areas.feed, state);
}

// ===== Tests =====
