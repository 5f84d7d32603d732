//! Feed tab bar widget.
//!
//! One tab per feed in display order, numbered to match the `1`-`5` key
//! bindings. Click position mapping mirrors the geometry of ratatui's
//! `Tabs` widget (default one-space padding, one-column divider).

use crate::model::FeedTab;
use crate::view::styles::CardStyles;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the feed tab bar with the current tab highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, selected: FeedTab, styles: &CardStyles) {
    let titles: Vec<Line> = FeedTab::ALL
        .iter()
        .map(|tab| Line::from(tab_title(*tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" feedtui "))
        .highlight_style(styles.tab_highlight_style())
        .select(selected.index());

    frame.render_widget(tabs, area);
}

/// Map a click position to the tab under it, if any.
///
/// Only clicks on the label row count; clicks on the border, a divider,
/// or past the last tab return `None`.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<FeedTab> {
    if area.height < 3 || row != area.y + 1 {
        return None;
    }
    let inner_left = area.x + 1;
    let inner_right = area.right().saturating_sub(1);
    if column < inner_left || column >= inner_right {
        return None;
    }

    let mut x = inner_left;
    for tab in FeedTab::ALL {
        let label_width = tab_title(tab).width() as u16;
        // One space of padding on each side of the label.
        let tab_width = label_width + 2;
        if column < x.saturating_add(tab_width) {
            return Some(tab);
        }
        x = x.saturating_add(tab_width);
        // Divider column between tabs.
        if column < x.saturating_add(1) {
            return None;
        }
        x = x.saturating_add(1);
    }
    None
}

fn tab_title(tab: FeedTab) -> String {
    format!("{} {}", tab.index() + 1, tab.label())
}

// ===== Tests =====
