//! View-state layer - geometry between the domain model and the renderer.
//!
//! Everything here is pure: card heights, the staggered-grid layout, hit
//! testing, and the exposure snapshots sampled from a layout. The state
//! layer rebuilds a [`FeedLayout`] whenever cards, column mode, or the
//! terminal size change; the view layer draws exactly what the layout
//! measured.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (RowHeight, RowOffset, CardIndex, ViewportDimensions)
//! - `metrics`: Text wrapping and per-kind card height measurement
//! - `layout`: CardSlot/FeedLayout - the staggered-grid placement engine

pub mod layout;
pub mod metrics;
pub mod types;

pub use layout::{CardSlot, FeedLayout};
pub use metrics::{card_height, wrap_text};
pub use types::{CardIndex, InvalidRowHeight, RowHeight, RowOffset, ViewportDimensions};
