//! Status line at the bottom of the screen.
//!
//! Left side shows where the user is (tab, page, column mode) plus any
//! activity flags; the tail shows the active notice, or key hints when
//! there is none.

use crate::state::AppState;
use crate::view::styles::CardStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "j/k scroll · 1-5 tab · r refresh · c columns · ? help · q quit";

/// Render the one-row status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &CardStyles) {
    let mut left = format!(
        " {} · page {} · {}",
        state.tab.label(),
        state.page(),
        state.columns
    );
    if state.is_refreshing() {
        left.push_str(" · refreshing…");
    }
    if state.is_loading_more() {
        left.push_str(" · loading…");
    }
    if let Some(id) = state.playing() {
        left.push_str(&format!(" · ▶ {id}"));
    }

    let tail = match state.notice() {
        Some(notice) => Span::styled(
            notice.text().to_string(),
            styles.style_for_notice(notice.level()),
        ),
        None => Span::styled(HINTS, styles.hint_style()),
    };

    let line = Line::from(vec![Span::raw(left), Span::raw("  │  "), tail]);
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====
