//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Unique identifier for a feed card.
///
/// Stable across layout passes; pagination clones derive their ids from the
/// template id (`"{template}_p{page}_i{index}"`) so every card in the feed
/// stays unique. NEVER export the raw constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(String);

impl CardId {
    /// Smart constructor: validates non-empty card id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCardId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidCardId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the id of a pagination clone of this card.
    ///
    /// # Example
    /// ```
    /// use feedtui::model::CardId;
    ///
    /// let template = CardId::new("video_001").unwrap();
    /// let clone = template.paged(3, 2);
    /// assert_eq!(clone.as_str(), "video_001_p3_i2");
    /// ```
    pub fn paged(&self, page: usize, index: usize) -> Self {
        Self(format!("{}_p{}_i{}", self.0, page, index))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Validation failure for [`CardId`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidCardId {
    /// The input string was empty.
    #[error("card id cannot be empty")]
    Empty,
}

// ===== Tests =====
