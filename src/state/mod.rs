//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI. Time
//! enters only as `Instant` parameters; the impure shell supplies them.

pub mod app_state;
pub mod delete_handler;
pub mod feed_handler;
pub mod scroll_handler;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::{AppState, Notice, NoticeLevel};
pub use delete_handler::{cancel_delete, confirm_delete, request_delete};
pub use feed_handler::{maybe_start_load_more, start_refresh, tick};
pub use scroll_handler::{clamp_scroll, handle_scroll_action};
pub use tab_handler::{handle_tab_action, switch_tab};
