//! Application state and transitions.
//!
//! `AppState` is the root state type containing all UI state. State
//! transitions are pure functions over it, driven by the event loop; the
//! current time is always passed in as an [`Instant`] so every transition
//! is testable without clocks or sleeps.
//!
//! # State Machine
//!
//! The UI operates as a state machine with these primary axes:
//!
//! - **Tab**: which of the five feeds is shown; switching reloads page one.
//! - **Fetch**: idle, refreshing, or loading more — at most one pending
//!   fetch at a time, completed by `tick` when its ready instant passes.
//! - **Delete dialog**: closed, or open for one card id awaiting y/n.
//! - **Playback**: delegated to the [`PlaybackCoordinator`]; the state
//!   layer only remembers when the current playback started so the view
//!   can render the countdown.

use std::time::{Duration, Instant};

use crate::config::ResolvedConfig;
use crate::exposure::{
    ExposureRegistry, LayoutSnapshot, ObserveReport, PlaybackChange, PlaybackCoordinator,
};
use crate::model::{CardId, ColumnMode, FeedCard, FeedTab};
use crate::repo::FeedRepository;
use crate::view_state::RowOffset;

// ===== Notices =====

/// Severity of a status-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Routine feedback (refresh done, caught up, card deleted).
    Info,
    /// Something went wrong but the app keeps running.
    Error,
}

/// Transient status-line message with an expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    level: NoticeLevel,
    expires_at: Instant,
}

impl Notice {
    /// Message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Severity for styling.
    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

// ===== Pending fetches =====

/// What a due pending fetch completes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchKind {
    /// Reload page one of the current tab.
    Refresh,
    /// Append the next page to the current tab.
    LoadMore,
}

/// A scheduled repository fetch, simulating network latency. The fetch
/// completes when `tick` runs at or after `ready_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingFetch {
    pub(crate) kind: FetchKind,
    pub(crate) ready_at: Instant,
}

// ===== Tunables =====

/// Config-derived knobs, converted to durations once at startup.
#[derive(Debug, Clone)]
struct Tunables {
    page_size: usize,
    fetch_delay: Duration,
    countdown: Duration,
    notice_lifetime: Duration,
}

impl Tunables {
    fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            page_size: config.page_size,
            fetch_delay: Duration::from_millis(config.refresh_ms),
            countdown: Duration::from_secs(config.countdown_secs),
            notice_lifetime: Duration::from_secs(config.notice_secs),
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// The repository, the current card list, and the playback coordinator are
/// private behind accessors; the handlers in this module mutate them
/// through crate-visible fields. UI toggles that the view reads directly
/// are public.
#[derive(Debug)]
pub struct AppState {
    pub(crate) repository: FeedRepository,
    pub(crate) cards: Vec<FeedCard>,

    /// Selected feed tab.
    pub tab: FeedTab,

    /// Scroll offset in content rows. Clamped to the layout extent on
    /// every draw, so stale values after a reflow are harmless.
    pub scroll: RowOffset,

    /// Column layout mode. Toggling reflows the whole feed.
    pub columns: ColumnMode,

    /// Whether the help overlay is open.
    pub help_visible: bool,

    /// Set when the user asks to exit; the event loop stops after the
    /// current iteration.
    pub should_quit: bool,

    pub(crate) refreshing: bool,
    pub(crate) loading_more: bool,
    pub(crate) has_more: bool,
    pub(crate) page: usize,
    pub(crate) pending_fetch: Option<PendingFetch>,
    pub(crate) pending_delete: Option<CardId>,
    pub(crate) notice: Option<Notice>,
    pub(crate) coordinator: PlaybackCoordinator,
    pub(crate) countdown_started: Option<Instant>,
    tunables: Tunables,
}

impl AppState {
    /// Create the state for `tab`, loading its first page synchronously.
    pub fn new(repository: FeedRepository, config: &ResolvedConfig, tab: FeedTab) -> Self {
        let mut state = Self {
            repository,
            cards: Vec::new(),
            tab,
            scroll: RowOffset::new(0),
            columns: config.columns,
            help_visible: false,
            should_quit: false,
            refreshing: false,
            loading_more: false,
            has_more: true,
            page: 1,
            pending_fetch: None,
            pending_delete: None,
            notice: None,
            coordinator: PlaybackCoordinator::new(),
            countdown_started: None,
            tunables: Tunables::from_config(config),
        };
        state.load_first_page();
        state
    }

    /// Replace the feed with page one of the current tab and restart
    /// tracking. Shared by startup, tab switches, and refresh completion.
    pub(crate) fn load_first_page(&mut self) {
        self.cards = self
            .repository
            .page(self.tab, 1, self.tunables.page_size);
        self.page = 1;
        self.has_more = !self.cards.is_empty();
        self.scroll = RowOffset::new(0);
        self.refreshing = false;
        self.loading_more = false;
        self.pending_fetch = None;
        self.coordinator.reset();
        self.countdown_started = None;
        for card in &self.cards {
            if card.is_tracked() {
                self.coordinator.track(card.id().clone(), card.kind());
            }
        }
    }

    // ===== Accessors =====

    /// Cards currently on screen for the selected tab, in feed order.
    pub fn cards(&self) -> &[FeedCard] {
        &self.cards
    }

    /// Currently playing card, if any.
    pub fn playing(&self) -> Option<&CardId> {
        self.coordinator.playing()
    }

    /// Exposure registry snapshot (debug overlay).
    pub fn registry(&self) -> &ExposureRegistry {
        self.coordinator.registry()
    }

    /// Active status notice, if one has not expired yet.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Card awaiting delete confirmation, if the dialog is open.
    pub fn pending_delete(&self) -> Option<&CardId> {
        self.pending_delete.as_ref()
    }

    /// Whether the delete-confirmation dialog is open.
    pub fn is_dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Whether a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Whether a load-more fetch is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    /// Whether further pages may exist for the current tab.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last loaded page number (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn page_size(&self) -> usize {
        self.tunables.page_size
    }

    pub(crate) fn fetch_delay(&self) -> Duration {
        self.tunables.fetch_delay
    }

    // ===== Notices =====

    /// Show a status-line notice until the configured lifetime elapses.
    pub fn show_notice(&mut self, text: impl Into<String>, level: NoticeLevel, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            expires_at: now + self.tunables.notice_lifetime,
        });
    }

    // ===== Playback =====

    /// Feed one layout snapshot to the coordinator and restart or clear
    /// the countdown if playback changed.
    pub fn observe_layout(&mut self, snapshot: &LayoutSnapshot, now: Instant) -> ObserveReport {
        let report = self.coordinator.observe(snapshot);
        if let Some(change) = report.playback_changes.last() {
            self.apply_playback_change(change, now);
        }
        report
    }

    pub(crate) fn apply_playback_change(&mut self, change: &PlaybackChange, now: Instant) {
        self.countdown_started = change.current.as_ref().map(|_| now);
    }

    /// Seconds left on the autoplay countdown of the playing card.
    ///
    /// `None` when nothing is playing; `Some(0)` once the countdown has
    /// elapsed and playback is steady.
    pub fn countdown_remaining(&self, now: Instant) -> Option<u64> {
        self.coordinator.playing()?;
        let started = self.countdown_started?;
        let remaining = self
            .tunables
            .countdown
            .saturating_sub(now.duration_since(started));
        Some(remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0))
    }

    // ===== UI toggles =====

    /// Flip between single and double column layout. The next draw
    /// reflows and re-clamps the scroll offset.
    pub fn toggle_columns(&mut self) {
        self.columns = self.columns.toggled();
    }

    /// Open or close the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
