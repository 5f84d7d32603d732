//! Staggered-grid layout engine.
//!
//! Places cards top-down into one or two lanes: half-span cards fill the
//! shallowest lane, full-span cards start below every lane and push all
//! lane depths past themselves. One blank row separates vertically adjacent
//! cards. The resulting [`FeedLayout`] is the single geometry authority for
//! rendering, hit testing, the load-more trigger, and the exposure
//! snapshots fed to the playback coordinator.

use crate::exposure::{ItemLayout, LayoutSnapshot};
use crate::model::{CardId, CardSpan, ColumnMode, FeedCard};
use crate::view_state::metrics::card_height;
use crate::view_state::types::{CardIndex, RowHeight, RowOffset, ViewportDimensions};

/// Rows of blank spacing below each placed card.
const CARD_SPACING: usize = 1;

/// Columns of blank gutter between lanes in double-column mode.
const LANE_GUTTER: u16 = 1;

// ===== CardSlot =====

/// One card's resolved position in the laid-out feed.
///
/// `offset` is in content rows (scroll-independent); the renderer subtracts
/// the scroll offset to find the screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    index: CardIndex,
    id: CardId,
    lane: u8,
    x: u16,
    width: u16,
    offset: RowOffset,
    height: RowHeight,
}

impl CardSlot {
    /// Index of the card in the feed list this slot was built from.
    pub fn index(&self) -> CardIndex {
        self.index
    }

    /// Card identity.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Lane the card landed in (0 = leftmost; full-span cards report 0).
    pub fn lane(&self) -> u8 {
        self.lane
    }

    /// Leftmost column of the card.
    pub fn x(&self) -> u16 {
        self.x
    }

    /// Width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Top content row of the card.
    pub fn offset(&self) -> RowOffset {
        self.offset
    }

    /// Height in rows.
    pub fn height(&self) -> RowHeight {
        self.height
    }

    /// Content row just past the card's last row.
    pub fn bottom(&self) -> usize {
        self.offset.get() + self.height.get() as usize
    }

    fn intersects_rows(&self, start: usize, end: usize) -> bool {
        self.offset.get() < end && self.bottom() > start
    }
}

// ===== FeedLayout =====

/// Complete layout of one feed at one viewport width and column mode.
///
/// Rebuilt from scratch whenever the card list, the column mode, or the
/// terminal size changes; never patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct FeedLayout {
    slots: Vec<CardSlot>,
    total_height: usize,
    lanes: u8,
}

impl FeedLayout {
    /// Lay out `cards` for the given column mode and viewport width.
    ///
    /// Degenerate viewports (too narrow to hold a lane) yield an empty
    /// layout rather than zero-width slots.
    pub fn build(cards: &[FeedCard], mode: ColumnMode, viewport: ViewportDimensions) -> Self {
        let lanes = mode.lanes();
        let lane_width = match lanes {
            1 => viewport.width,
            _ => viewport.width.saturating_sub(LANE_GUTTER) / u16::from(lanes),
        };
        if lane_width == 0 {
            return Self {
                slots: Vec::new(),
                total_height: 0,
                lanes,
            };
        }

        let mut depths = vec![0usize; lanes as usize];
        let mut slots = Vec::with_capacity(cards.len());
        for (index, card) in cards.iter().enumerate() {
            let slot = match card.span() {
                CardSpan::Full => {
                    let offset = *depths.iter().max().expect("at least one lane");
                    let height = card_height(card, viewport.width);
                    let next = offset + height.get() as usize + CARD_SPACING;
                    for depth in &mut depths {
                        *depth = next;
                    }
                    CardSlot {
                        index: CardIndex::new(index),
                        id: card.id().clone(),
                        lane: 0,
                        x: 0,
                        width: viewport.width,
                        offset: RowOffset::new(offset),
                        height,
                    }
                }
                CardSpan::Half => {
                    // min_by_key keeps the first minimum, so depth ties
                    // fill left-to-right.
                    let (lane, offset) = depths
                        .iter()
                        .copied()
                        .enumerate()
                        .min_by_key(|(_, depth)| *depth)
                        .expect("at least one lane");
                    let height = card_height(card, lane_width);
                    depths[lane] = offset + height.get() as usize + CARD_SPACING;
                    CardSlot {
                        index: CardIndex::new(index),
                        id: card.id().clone(),
                        lane: lane as u8,
                        x: lane as u16 * (lane_width + LANE_GUTTER),
                        width: lane_width,
                        offset: RowOffset::new(offset),
                        height,
                    }
                }
            };
            slots.push(slot);
        }

        // The deepest lane carries one trailing spacing row; drop it.
        let total_height = depths
            .iter()
            .max()
            .copied()
            .unwrap_or(0)
            .saturating_sub(CARD_SPACING);
        Self {
            slots,
            total_height,
            lanes,
        }
    }

    /// All slots, in feed order.
    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Total content height in rows, excluding trailing spacing.
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    /// Number of lanes this layout was built with.
    pub fn lanes(&self) -> u8 {
        self.lanes
    }

    /// Whether the layout holds no cards.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Largest scroll offset that still fills the viewport with content.
    pub fn max_scroll(&self, viewport_height: u16) -> RowOffset {
        RowOffset::new(self.total_height.saturating_sub(viewport_height as usize))
    }

    /// Sample the layout into an immutable exposure snapshot.
    ///
    /// Materializes every slot within one viewport height of the visible
    /// window (the overscan region), mirroring how a lazy list keeps
    /// near-viewport items mounted: cards farther away are absent from the
    /// snapshot entirely. Offsets are viewport-relative and signed.
    pub fn snapshot(&self, frame: u64, scroll: RowOffset, viewport_height: u16) -> LayoutSnapshot {
        let viewport = i64::from(viewport_height);
        let overscan = viewport;
        let scroll = scroll.get() as i64;

        let mut snapshot = LayoutSnapshot::new(frame, 0, viewport);
        for slot in &self.slots {
            let top = slot.offset.get() as i64 - scroll;
            let extent = i64::from(slot.height.get());
            if top < viewport + overscan && top + extent > -overscan {
                snapshot.push_item(ItemLayout::new(slot.id.clone(), slot.lane, top, extent));
            }
        }
        snapshot
    }

    /// Resolve a feed-area cell to the card drawn there, if any.
    ///
    /// `x`/`y` are feed-area-relative screen coordinates; `scroll` maps the
    /// row back into content space. Spacing rows and lane gutters hit
    /// nothing.
    pub fn hit_test(&self, x: u16, y: u16, scroll: RowOffset) -> Option<&CardSlot> {
        let row = scroll.get() + y as usize;
        self.slots.iter().find(|slot| {
            x >= slot.x
                && x < slot.x.saturating_add(slot.width)
                && slot.intersects_rows(row, row + 1)
        })
    }

    /// Highest feed index with any row inside the visible window.
    ///
    /// Drives the load-more trigger. Ignores overscan so pagination fires
    /// on what the user actually sees.
    pub fn last_visible_index(&self, scroll: RowOffset, viewport_height: u16) -> Option<usize> {
        let start = scroll.get();
        let end = start + viewport_height as usize;
        self.slots
            .iter()
            .filter(|slot| slot.intersects_rows(start, end))
            .map(|slot| slot.index().get())
            .max()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
