//! Card height measurement.
//!
//! Heights are computed from content before layout, so the layout engine,
//! the exposure snapshot, and the renderer all agree on geometry. The
//! renderer must draw exactly the rows measured here.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{CardContent, FeedCard};
use crate::view_state::types::RowHeight;

/// Rows taken by a card's top and bottom border.
pub const BORDER_ROWS: u16 = 2;

/// Rows of placeholder art in image and video cards.
pub const PLACEHOLDER_ART_ROWS: u16 = 5;

/// Rows of placeholder art in product cards.
pub const PRODUCT_ART_ROWS: u16 = 4;

/// The play/countdown banner row of a video card.
pub const VIDEO_BANNER_ROWS: u16 = 1;

/// Fixed height of the load-more indicator card.
pub const LOADING_ROWS: u16 = 3;

/// Wrap text to `width` display columns using greedy word wrapping.
///
/// Words wider than a whole line are hard-split by character. Explicit
/// newlines are preserved; blank input lines yield empty output lines.
/// Width zero yields no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;
        for word in raw_line.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                // Hard-split the oversized word; the tail keeps filling.
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                word_width + 1
            };
            if current_width + needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Height in rows of `card` rendered at `width` outer columns.
///
/// The formula per kind (inner width = outer minus side borders):
/// - text: borders + wrapped body (at least one row)
/// - image: borders + art + wrapped caption
/// - video: borders + art + banner + wrapped caption
/// - product: borders + art + name row + price row
/// - loading: fixed 3 rows
pub fn card_height(card: &FeedCard, width: u16) -> RowHeight {
    let inner = width.saturating_sub(BORDER_ROWS);
    let rows = match card.content() {
        CardContent::Text { body } => BORDER_ROWS + line_count(body, inner).max(1),
        CardContent::Image { caption, .. } => {
            BORDER_ROWS + PLACEHOLDER_ART_ROWS + line_count(caption, inner)
        }
        CardContent::Video { caption, .. } => {
            BORDER_ROWS + PLACEHOLDER_ART_ROWS + VIDEO_BANNER_ROWS + line_count(caption, inner)
        }
        CardContent::Product { .. } => BORDER_ROWS + PRODUCT_ART_ROWS + 2,
        CardContent::Loading => LOADING_ROWS,
    };
    RowHeight::new(rows.max(1)).expect("height is clamped to >= 1")
}

fn line_count(text: &str, width: u16) -> u16 {
    u16::try_from(wrap_text(text, width).len()).unwrap_or(u16::MAX)
}

// ===== Tests =====
