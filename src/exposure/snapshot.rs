//! Immutable layout snapshots consumed by the exposure pipeline.

use crate::model::CardId;

/// Scroll-axis geometry of one materialized card within a snapshot.
///
/// Offsets are viewport-relative and signed: a card scrolled above the
/// viewport has a negative offset. For the staggered multi-lane grid the
/// offset is the vertical position; `lane` is the column index (0 =
/// leftmost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLayout {
    id: CardId,
    lane: u8,
    offset: i64,
    extent: i64,
}

impl ItemLayout {
    /// Describe one card's placement.
    pub fn new(id: CardId, lane: u8, offset: i64, extent: i64) -> Self {
        Self {
            id,
            lane,
            offset,
            extent,
        }
    }

    /// Card identity.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Lane (column) index, 0 = leftmost.
    pub fn lane(&self) -> u8 {
        self.lane
    }

    /// Position along the scroll axis, viewport-relative, signed.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Extent (height) along the scroll axis.
    pub fn extent(&self) -> i64 {
        self.extent
    }
}

/// One immutable, point-in-time sample of the scrollable container.
///
/// Produced by the layout engine on every layout pass; read-only to the
/// exposure core. Recreated wholesale on every scroll/relayout event, never
/// mutated in place. `frame` increases monotonically so the coordinator can
/// discard stale deliveries (last-snapshot-wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    frame: u64,
    viewport_start: i64,
    viewport_end: i64,
    items: Vec<ItemLayout>,
}

impl LayoutSnapshot {
    /// Create an empty snapshot for the given viewport bounds.
    ///
    /// An inverted viewport (`end < start`) is legal and simply makes every
    /// fraction zero; the sampler's intersection math handles it without a
    /// special case.
    pub fn new(frame: u64, viewport_start: i64, viewport_end: i64) -> Self {
        Self {
            frame,
            viewport_start,
            viewport_end,
            items: Vec::new(),
        }
    }

    /// Append a materialized item. Items keep insertion order; the
    /// coordinator processes transitions in this order.
    pub fn push_item(&mut self, item: ItemLayout) {
        self.items.push(item);
    }

    /// Builder-style [`push_item`](Self::push_item).
    pub fn with_item(mut self, id: CardId, lane: u8, offset: i64, extent: i64) -> Self {
        self.push_item(ItemLayout::new(id, lane, offset, extent));
        self
    }

    /// Monotonic frame sequence number.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Viewport start along the scroll axis.
    pub fn viewport_start(&self) -> i64 {
        self.viewport_start
    }

    /// Viewport end along the scroll axis.
    pub fn viewport_end(&self) -> i64 {
        self.viewport_end
    }

    /// All materialized items, in insertion order.
    pub fn items(&self) -> &[ItemLayout] {
        &self.items
    }

    /// Look up one item's layout by id.
    pub fn get(&self, id: &CardId) -> Option<&ItemLayout> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether `id` is materialized in this snapshot.
    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot has no materialized items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ===== Tests =====
