//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod card;
pub mod columns;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod tab;

// Re-export for convenience
pub use card::{CardContent, CardKind, CardSpan, FeedCard, LOADING_CARD_ID};
pub use columns::{ColumnMode, UnknownColumnMode};
pub use error::{AppError, FeedError};
pub use identifiers::{CardId, InvalidCardId};
pub use key_action::KeyAction;
pub use tab::{FeedTab, UnknownTab};
