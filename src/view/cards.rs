//! Feed pane rendering.
//!
//! Cards are drawn as hand-built rows so a card scrolled half off-screen
//! renders only its visible rows. Each card's rows come from
//! [`card_lines`], which must produce exactly the height measured by
//! [`crate::view_state::card_height`] — the layout engine, the exposure
//! snapshot, and the renderer all agree on that number.

use crate::model::{CardContent, CardKind, FeedCard};
use crate::state::AppState;
use crate::view::styles::CardStyles;
use crate::view_state::metrics::{PLACEHOLDER_ART_ROWS, PRODUCT_ART_ROWS};
use crate::view_state::{wrap_text, FeedLayout};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render every slot of the layout that intersects the viewport.
///
/// `countdown` is the remaining autoplay countdown of the playing card,
/// shown in that card's banner row.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    layout: &FeedLayout,
    countdown: Option<u64>,
    styles: &CardStyles,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if layout.is_empty() {
        render_empty_feed(frame, area, styles);
        return;
    }

    let scroll = state.scroll.get();
    let viewport_end = scroll + area.height as usize;

    for slot in layout.slots() {
        let top = slot.offset().get();
        let bottom = slot.bottom();
        if bottom <= scroll || top >= viewport_end {
            continue;
        }
        let Some(card) = state.cards().get(slot.index().get()) else {
            continue;
        };

        let playing = state.playing() == Some(card.id());
        let lines = card_lines(card, slot.width(), playing, countdown, styles);

        let first = top.max(scroll);
        let last = bottom.min(viewport_end);
        let buffer = frame.buffer_mut();
        for row in first..last {
            let Some(line) = lines.get(row - top) else {
                break;
            };
            let y = area.y + (row - scroll) as u16;
            buffer.set_line(area.x + slot.x(), y, line, slot.width());
        }
    }
}

fn render_empty_feed(frame: &mut Frame, area: Rect, styles: &CardStyles) {
    let message = Paragraph::new(Span::styled(
        "Nothing here yet — press r to refresh",
        styles.hint_style(),
    ))
    .alignment(Alignment::Center);
    let middle = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(message, middle);
}

// ===== Card rows =====

/// Build the full row set of one card at `width` outer columns.
///
/// The result always has exactly `card_height(card, width)` lines, each
/// padded to the card width so partial blits keep the right border
/// aligned.
pub fn card_lines(
    card: &FeedCard,
    width: u16,
    playing: bool,
    countdown: Option<u64>,
    styles: &CardStyles,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2);
    let border = if playing {
        styles.playing_style()
    } else {
        styles.style_for_kind(card.kind())
    };

    let mut lines = Vec::new();
    match card.content() {
        CardContent::Text { body } => {
            lines.push(border_top(card.id().as_str(), inner, border));
            let wrapped = wrap_text(body, inner);
            if wrapped.is_empty() {
                lines.push(content_row("", inner, border));
            } else {
                for row in &wrapped {
                    lines.push(content_row(row, inner, border));
                }
            }
            lines.push(border_bottom(inner, border));
        }
        CardContent::Image { url, caption } => {
            lines.push(border_top(card.id().as_str(), inner, border));
            push_art(&mut lines, PLACEHOLDER_ART_ROWS, '░', url, inner, border);
            for row in &wrap_text(caption, inner) {
                lines.push(content_row(row, inner, border));
            }
            lines.push(border_bottom(inner, border));
        }
        CardContent::Video { url, caption } => {
            lines.push(border_top(card.id().as_str(), inner, border));
            push_art(&mut lines, PLACEHOLDER_ART_ROWS, '░', url, inner, border);
            lines.push(banner_row(playing, countdown, inner, border, styles));
            for row in &wrap_text(caption, inner) {
                lines.push(content_row(row, inner, border));
            }
            lines.push(border_bottom(inner, border));
        }
        CardContent::Product {
            image_url,
            name,
            price,
        } => {
            lines.push(border_top(card.id().as_str(), inner, border));
            push_art(&mut lines, PRODUCT_ART_ROWS, '▒', image_url, inner, border);
            lines.push(content_row(name, inner, border));
            lines.push(styled_row(
                price,
                inner,
                border,
                styles.style_for_kind(CardKind::Product),
            ));
            lines.push(border_bottom(inner, border));
        }
        CardContent::Loading => {
            lines.push(plain_top(inner, border));
            lines.push(styled_row(
                &center_to_width("Loading more…", inner),
                inner,
                border,
                border,
            ));
            lines.push(border_bottom(inner, border));
        }
    }
    lines
}

/// Placeholder art band with the source url centered in the middle row.
fn push_art(
    lines: &mut Vec<Line<'static>>,
    rows: u16,
    fill: char,
    url: &str,
    inner: u16,
    border: Style,
) {
    let middle = rows / 2;
    for row in 0..rows {
        if row == middle {
            lines.push(styled_row(&center_to_width(url, inner), inner, border, border));
        } else {
            let band: String = std::iter::repeat(fill).take(inner as usize).collect();
            lines.push(styled_row(&band, inner, border, border));
        }
    }
}

fn banner_row(
    playing: bool,
    countdown: Option<u64>,
    inner: u16,
    border: Style,
    styles: &CardStyles,
) -> Line<'static> {
    let (text, style) = if playing {
        let label = match countdown {
            Some(secs) if secs > 0 => format!("▶ Playing · {secs}s"),
            _ => "▶ Playing".to_string(),
        };
        (label, styles.playing_style())
    } else {
        ("▷ Video".to_string(), styles.style_for_kind(CardKind::Video))
    };
    styled_row(&format!(" {text}"), inner, border, style)
}

fn border_top(label: &str, inner: u16, style: Style) -> Line<'static> {
    let inner = inner as usize;
    let tagged = format!(" {label} ");
    let bar = if tagged.width() <= inner {
        format!("┌{}{}┐", tagged, "─".repeat(inner - tagged.width()))
    } else {
        format!("┌{}┐", "─".repeat(inner))
    };
    Line::from(Span::styled(bar, style))
}

fn plain_top(inner: u16, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        format!("┌{}┐", "─".repeat(inner as usize)),
        style,
    ))
}

fn border_bottom(inner: u16, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        format!("└{}┘", "─".repeat(inner as usize)),
        style,
    ))
}

fn content_row(text: &str, inner: u16, border: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled("│", border),
        Span::raw(pad_to_width(text, inner)),
        Span::styled("│", border),
    ])
}

fn styled_row(text: &str, inner: u16, border: Style, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled("│", border),
        Span::styled(pad_to_width(text, inner), style),
        Span::styled("│", border),
    ])
}

/// Pad to exactly `width` display columns, truncating overlong text.
fn pad_to_width(text: &str, width: u16) -> String {
    let mut out = fit_to_width(text, width);
    let pad = (width as usize).saturating_sub(out.width());
    out.push_str(&" ".repeat(pad));
    out
}

/// Truncate to `width` display columns, marking the cut with an ellipsis.
fn fit_to_width(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis.
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

fn center_to_width(text: &str, width: u16) -> String {
    let fitted = fit_to_width(text, width);
    let total = (width as usize).saturating_sub(fitted.width());
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(total - left))
}

// ===== Tests =====

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
