//! Help overlay listing the default key bindings.
//!
//! Triggered by `?`, dismissed by `Esc` or `?`.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::styles::CardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &CardStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Key bindings ")
                .borders(Borders::ALL),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help, popup_area);

    // Dismissal hint over the bottom border.
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Span::styled(
        " Press Esc or ? to close ",
        styles.hint_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn build_help_content() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled("Scrolling", heading)),
        Line::from("  j / ↓          one row down"),
        Line::from("  k / ↑          one row up"),
        Line::from("  Ctrl+d / PgDn  page down"),
        Line::from("  Ctrl+u / PgUp  page up"),
        Line::from("  g / Home       top of feed"),
        Line::from("  G / End        bottom of feed"),
        Line::from(""),
        Line::from(Span::styled("Feeds", heading)),
        Line::from("  ] / Tab        next tab"),
        Line::from("  [ / Shift+Tab  previous tab"),
        Line::from("  1-5            jump to tab"),
        Line::from("  r              refresh the feed"),
        Line::from(""),
        Line::from(Span::styled("View", heading)),
        Line::from("  c              toggle single/double columns"),
        Line::from("  ?              toggle this help"),
        Line::from(""),
        Line::from(Span::styled("Cards", heading)),
        Line::from("  click          delete card (confirmation)"),
        Line::from("  wheel          scroll the feed"),
        Line::from(""),
        Line::from(Span::styled("Application", heading)),
        Line::from("  q / Ctrl+C     quit"),
    ]
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

// ===== Tests =====
