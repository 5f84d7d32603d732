//! feedtui - terminal feed browser
//!
//! TUI application that renders a mixed-media feed (text, images, videos,
//! products) from a JSON fixture and tracks per-card viewport exposure to
//! drive video autoplay selection.
//!
//! Architecture is Pure Core / Impure Shell: `exposure`, `model`, `state`,
//! and `view_state` are pure and fully testable without a terminal; `view`
//! owns the terminal and the event loop; `repo` owns fixture and cache IO.

pub mod config;
pub mod exposure;
pub mod logging;
pub mod model;
pub mod repo;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
