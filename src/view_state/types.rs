//! Core view-state newtypes

/// Height of a rendered card in rows. Always >= 1: every card kind draws
/// at least its border row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowHeight(u16);

/// Error returned when attempting to create a RowHeight of zero via the
/// smart constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("RowHeight must be >= 1 (got {0})")]
pub struct InvalidRowHeight(pub u16);

impl RowHeight {
    /// Minimum valid card height.
    pub const ONE: Self = Self(1);

    /// Smart constructor that validates height is >= 1.
    pub fn new(height: u16) -> Result<Self, InvalidRowHeight> {
        if height == 0 {
            Err(InvalidRowHeight(height))
        } else {
            Ok(Self(height))
        }
    }

    /// Get the raw u16 value.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::ONE
    }
}

/// Absolute row offset from the top of the feed content. 0-indexed,
/// pre-scroll (content space, not screen space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RowOffset(usize);

impl RowOffset {
    /// Create a new RowOffset from a raw value.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Add an amount to this offset, saturating at usize::MAX.
    pub fn saturating_add(&self, amount: usize) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Subtract an amount from this offset, saturating at 0.
    pub fn saturating_sub(&self, amount: usize) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

/// Card index within the feed list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CardIndex(usize);

impl CardIndex {
    /// Create a new CardIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod row_height {
        use super::*;

        #[test]
        fn new_accepts_one() {
            let result = RowHeight::new(1);
            assert_eq!(result.unwrap(), RowHeight::ONE);
        }

        #[test]
        fn new_accepts_greater_than_one() {
            assert_eq!(RowHeight::new(42).unwrap().get(), 42);
        }

        #[test]
        fn new_rejects_zero() {
            assert_eq!(RowHeight::new(0).unwrap_err(), InvalidRowHeight(0));
        }

        #[test]
        fn default_is_one() {
            assert_eq!(RowHeight::default(), RowHeight::ONE);
        }

        #[test]
        fn ordering_works() {
            assert!(RowHeight::new(1).unwrap() < RowHeight::new(2).unwrap());
        }
    }

    mod row_offset {
        use super::*;

        #[test]
        fn new_creates_offset() {
            assert_eq!(RowOffset::new(42).get(), 42);
        }

        #[test]
        fn default_is_zero() {
            assert_eq!(RowOffset::default().get(), 0);
        }

        #[test]
        fn saturating_add_at_max() {
            let offset = RowOffset::new(usize::MAX);
            assert_eq!(offset.saturating_add(100).get(), usize::MAX);
        }

        #[test]
        fn saturating_sub_at_zero() {
            assert_eq!(RowOffset::new(0).saturating_sub(100).get(), 0);
        }

        #[test]
        fn ordering_works() {
            assert!(RowOffset::new(5) < RowOffset::new(10));
        }
    }

    mod card_index {
        use super::*;

        #[test]
        fn new_creates_index() {
            assert_eq!(CardIndex::new(7).get(), 7);
        }

        #[test]
        fn from_usize_conversion() {
            let index: CardIndex = 42.into();
            assert_eq!(index.get(), 42);
        }

        #[test]
        fn hash_works() {
            use std::collections::HashSet;
            let mut set = HashSet::new();
            set.insert(CardIndex::new(1));
            set.insert(CardIndex::new(2));
            set.insert(CardIndex::new(1));
            assert_eq!(set.len(), 2);
        }
    }

    mod viewport_dimensions {
        use super::*;

        #[test]
        fn new_creates_dimensions() {
            let dims = ViewportDimensions::new(80, 24);
            assert_eq!(dims.width, 80);
            assert_eq!(dims.height, 24);
        }

        #[test]
        fn equality_works() {
            assert_eq!(
                ViewportDimensions::new(80, 24),
                ViewportDimensions::new(80, 24)
            );
            assert_ne!(
                ViewportDimensions::new(80, 24),
                ViewportDimensions::new(100, 30)
            );
        }
    }
}
