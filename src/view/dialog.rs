//! Delete confirmation dialog.

use crate::model::CardId;
use crate::view::constants::{DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::view::styles::CardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the delete confirmation dialog centered on the screen.
///
/// The dialog captures all keys while open: `y`/Enter confirms,
/// `n`/Esc cancels.
pub fn render_delete_dialog(frame: &mut Frame, area: Rect, id: &CardId, styles: &CardStyles) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog_area);

    let body = vec![
        Line::from(""),
        Line::from(format!("Delete '{id}'?")),
        Line::from(""),
        Line::from(vec![
            Span::raw("y / Enter  confirm    "),
            Span::styled("n / Esc  cancel", styles.hint_style()),
        ]),
    ];

    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm delete ")
                .borders(Borders::ALL)
                .border_style(styles.style_for_notice(crate::state::NoticeLevel::Error)),
        );

    frame.render_widget(dialog, dialog_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
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
