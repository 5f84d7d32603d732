//! Geometry sampler: visibility fraction of one item within a viewport.

use crate::exposure::snapshot::{ItemLayout, LayoutSnapshot};

/// Fraction of `item`'s extent currently inside the snapshot's viewport,
/// in `[0, 1]`.
///
/// Pure intersection math along the scroll axis:
/// `visible = max(0, min(item_end, viewport_end) - max(item_start, viewport_start))`,
/// divided by the item's extent. Zero or negative extents yield `0.0`,
/// guarding the division.
///
/// Called once per tracked item per snapshot; O(1), no side effects. An
/// item missing from the snapshot entirely is the caller's concern (treated
/// as fraction 0, see the coordinator).
///
/// ```
/// use feedtui::exposure::{visible_fraction, ItemLayout, LayoutSnapshot};
/// use feedtui::model::CardId;
///
/// let snapshot = LayoutSnapshot::new(0, 50, 150);
/// let item = ItemLayout::new(CardId::new("a").unwrap(), 0, 0, 200);
/// assert_eq!(visible_fraction(&item, &snapshot), 0.5);
/// ```
pub fn visible_fraction(item: &ItemLayout, snapshot: &LayoutSnapshot) -> f32 {
    if item.extent() <= 0 {
        return 0.0;
    }
    let visible_start = item.offset().max(snapshot.viewport_start());
    let visible_end = (item.offset() + item.extent()).min(snapshot.viewport_end());
    let visible_extent = (visible_end - visible_start).max(0);
    visible_extent as f32 / item.extent() as f32
}

// ===== Tests =====
