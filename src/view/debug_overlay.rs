//! Developer-only exposure registry overlay (feature `debug-overlay`).
//!
//! Draws a box in the top-right corner of the feed pane listing every
//! tracked card's current exposure state, with the playing card marked.
//! Not part of the production surface.

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 34;

/// Render the exposure registry overlay into the top-right of `area`.
pub fn render_debug_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < OVERLAY_WIDTH || area.height < 4 {
        return;
    }

    let mut entries: Vec<(String, String)> = state
        .registry()
        .iter()
        .map(|(id, exposure)| (id.to_string(), exposure.to_string()))
        .collect();
    entries.sort();

    let playing = state.playing().map(|id| id.to_string());
    let mut lines: Vec<Line> = entries
        .into_iter()
        .map(|(id, exposure)| {
            let marker = if playing.as_deref() == Some(id.as_str()) {
                "▶"
            } else {
                " "
            };
            Line::from(format!("{marker} {id:<16} {exposure}"))
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(" (no tracked cards)"));
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = Rect {
        x: area.right().saturating_sub(OVERLAY_WIDTH),
        y: area.y,
        width: OVERLAY_WIDTH,
        height,
    };

    frame.render_widget(Clear, overlay_area);
    let overlay = Paragraph::new(lines).block(
        Block::default()
            .title(" exposure ")
            .borders(Borders::ALL),
    );
    frame.render_widget(overlay, overlay_area);
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;
    use crate::model::FeedTab;
    use crate::repo::FeedRepository;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const FIXTURE: &str = r#"{
        "all": [
            {"type": "video", "id": "v1", "url": "u", "caption": "c"},
            {"type": "text", "id": "t1", "body": "hello"}
        ],
        "videos": [], "users": [], "images": [], "products": []
    }"#;

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_debug_overlay(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn overlay_lists_observed_cards_with_their_state() {
        use crate::exposure::LayoutSnapshot;
        use crate::model::CardId;
        use std::time::Instant;

        let repository = FeedRepository::from_json(FIXTURE).unwrap();
        let mut state = AppState::new(repository, &ResolvedConfig::default(), FeedTab::All);

        let snapshot = LayoutSnapshot::new(1, 0, 100)
            .with_item(CardId::new("v1").unwrap(), 0, 0, 40)
            .with_item(CardId::new("t1").unwrap(), 0, 40, 120);
        state.observe_layout(&snapshot, Instant::now());

        let rendered = render(&state);
        assert!(rendered.contains("exposure"));
        assert!(rendered.contains("v1"));
        assert!(rendered.contains("▶"), "playing card should be marked");
    }

    #[test]
    fn overlay_shows_a_placeholder_before_the_first_observation() {
        let repository = FeedRepository::from_json(FIXTURE).unwrap();
        let state = AppState::new(repository, &ResolvedConfig::default(), FeedTab::All);
        assert!(render(&state).contains("(no tracked cards)"));
    }
}
