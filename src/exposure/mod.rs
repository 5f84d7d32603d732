//! Viewport exposure tracking and autoplay selection.
//!
//! This is the pure core of the application. Each rendered frame the shell
//! builds a [`LayoutSnapshot`] of viewport-relative card geometry and feeds
//! it to a [`PlaybackCoordinator`], which:
//!
//! 1. measures each tracked card's [`visible_fraction`],
//! 2. classifies it into an [`ExposureState`] band,
//! 3. emits distinct-until-changed [`ExposureTransition`]s into its
//!    [`ExposureRegistry`], and
//! 4. re-runs [`select_playing`] after every transition, notifying a
//!    [`PlaybackChange`] only when the winner actually changes.
//!
//! Everything in this module is synchronous and deterministic: no clocks,
//! no I/O, no global state. One coordinator instance serves one feed list;
//! independent lists get independent instances.

mod coordinator;
mod geometry;
mod registry;
mod selector;
mod snapshot;
mod state;

pub use coordinator::{ExposureTransition, ObserveReport, PlaybackChange, PlaybackCoordinator};
pub use geometry::visible_fraction;
pub use registry::ExposureRegistry;
pub use selector::select_playing;
pub use snapshot::{ItemLayout, LayoutSnapshot};
pub use state::ExposureState;
