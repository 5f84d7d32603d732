//! TUI rendering and terminal management (impure shell)

mod cards;
pub mod constants;
#[cfg(feature = "debug-overlay")]
pub mod debug_overlay;
mod dialog;
mod help;
mod screen;
mod status;
mod styles;
pub mod tabs;

pub use cards::{card_lines, render_feed};
pub use styles::{CardStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, CardKind, FeedTab, KeyAction};
use crate::repo::FeedRepository;
use crate::state::{
    cancel_delete, clamp_scroll, confirm_delete, handle_scroll_action, handle_tab_action,
    maybe_start_load_more, request_delete, start_refresh, switch_tab, tick, AppState,
};
use crate::view_state::types::ViewportDimensions;
use crate::view_state::FeedLayout;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Monotone frame number stamped into each exposure snapshot.
    frame_counter: u64,
    /// Last rendered tab bar area (for mouse click detection)
    last_tab_area: Option<Rect>,
    /// Last rendered feed pane area (for wheel/click routing)
    last_feed_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        repository: FeedRepository,
        config: &ResolvedConfig,
        tab: FeedTab,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let app_state = AppState::new(repository, config, tab);
        let key_bindings = KeyBindings::default();

        Ok(Self {
            terminal,
            app_state,
            key_bindings,
            frame_counter: 0,
            last_tab_area: None,
            last_feed_area: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Event-driven: redraws on
    /// input and resize immediately; the poll timer drives pending fetches,
    /// notice expiry, and the playing countdown.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render so the screen has content before the first event.
        self.draw(Instant::now())?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        let now = Instant::now();
                        if self.handle_key(key, now) {
                            return Ok(());
                        }
                        self.draw(now)?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw(Instant::now())?;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        self.draw(Instant::now())?;
                    }
                    _ => {}
                }
            } else {
                // Timer elapsed. Anything time-driven on screen right now
                // (in-flight fetch, live notice, playing countdown) needs a
                // redraw after the tick; an idle feed does not.
                let now = Instant::now();
                let animating = self.app_state.is_refreshing()
                    || self.app_state.is_loading_more()
                    || self.app_state.notice().is_some()
                    || self.app_state.playing().is_some();
                tick(&mut self.app_state, now);
                if animating {
                    self.draw(now)?;
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Delete dialog captures every key before binding dispatch.
        if self.app_state.is_dialog_open() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => confirm_delete(&mut self.app_state, now),
                KeyCode::Char('n') | KeyCode::Esc => cancel_delete(&mut self.app_state),
                _ => {}
            }
            return false;
        }

        // Help overlay: quit still works, ? or Esc closes, the rest is
        // blocked so bindings don't act on an invisible feed.
        if self.app_state.help_visible {
            match self.key_bindings.get(key) {
                Some(KeyAction::Quit) => return true,
                Some(KeyAction::Help) => self.app_state.toggle_help(),
                _ if key.code == KeyCode::Esc => self.app_state.toggle_help(),
                _ => {}
            }
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        match action {
            KeyAction::Quit => {
                self.app_state.should_quit = true;
                return true;
            }

            KeyAction::Help => self.app_state.toggle_help(),

            KeyAction::ToggleColumns => self.app_state.toggle_columns(),

            KeyAction::Refresh => start_refresh(&mut self.app_state, now),

            // Scrolling - delegate to the pure scroll handler with the
            // current feed geometry.
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                let feed = self.feed_area();
                let max_scroll = self.feed_layout(feed).max_scroll(feed.height);
                handle_scroll_action(&mut self.app_state, action, feed.height, max_scroll);
            }

            // Tab navigation - delegate to the pure tab handler.
            KeyAction::NextTab | KeyAction::PrevTab | KeyAction::SelectTab(_) => {
                handle_tab_action(&mut self.app_state, action);
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Wheel events scroll the feed; left clicks switch tabs (tab bar) or
    /// request a card delete (feed pane). Overlays swallow mouse input.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.is_dialog_open() || self.app_state.help_visible {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let action = if mouse.kind == MouseEventKind::ScrollUp {
                    KeyAction::ScrollUp
                } else {
                    KeyAction::ScrollDown
                };
                let feed = self.feed_area();
                let max_scroll = self.feed_layout(feed).max_scroll(feed.height);
                handle_scroll_action(&mut self.app_state, action, feed.height, max_scroll);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(tab_area) = self.last_tab_area {
                    if let Some(tab) = tabs::tab_at(tab_area, mouse.column, mouse.row) {
                        switch_tab(&mut self.app_state, tab);
                        return;
                    }
                }
                if let Some(feed) = self.last_feed_area {
                    if feed.contains(ratatui::layout::Position::new(mouse.column, mouse.row)) {
                        self.handle_feed_click(feed, mouse.column, mouse.row);
                    }
                }
            }
            _ => {}
        }
    }

    /// Open the delete dialog for the card under a feed-pane click.
    fn handle_feed_click(&mut self, feed: Rect, column: u16, row: u16) {
        let layout = self.feed_layout(feed);
        let hit = layout
            .hit_test(column - feed.x, row - feed.y, self.app_state.scroll)
            .map(|slot| slot.index().get());
        let Some(index) = hit else {
            return;
        };
        // The loading indicator is transient and has nothing to delete.
        let target = self
            .app_state
            .cards()
            .get(index)
            .filter(|card| card.kind() != CardKind::Loading)
            .map(|card| card.id().clone());
        if let Some(id) = target {
            request_delete(&mut self.app_state, id);
        }
    }

    /// Handle a terminal resize event
    ///
    /// The layout is rebuilt on every draw, so this only drops the cached
    /// hit-test areas; the next draw re-clamps the scroll offset.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("resize to {width}x{height}");
        self.last_tab_area = None;
        self.last_feed_area = None;
    }

    /// Render the current frame.
    ///
    /// Pipeline per draw: clamp scroll → layout → snapshot → observe →
    /// log transitions → render. Also arms load-more once the last page
    /// card scrolls into view.
    fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let areas = screen::screen_areas(frame_area);
        self.last_tab_area = Some(areas.tabs);
        self.last_feed_area = Some(areas.feed);

        let layout = self.feed_layout(areas.feed);
        clamp_scroll(&mut self.app_state, layout.max_scroll(areas.feed.height));

        self.frame_counter += 1;
        let snapshot = layout.snapshot(
            self.frame_counter,
            self.app_state.scroll,
            areas.feed.height,
        );
        let report = self.app_state.observe_layout(&snapshot, now);
        for transition in &report.transitions {
            debug!(
                id = %transition.id,
                from = %transition.from,
                to = %transition.to,
                "exposure transition"
            );
        }
        for change in &report.playback_changes {
            debug!(previous = ?change.previous, current = ?change.current, "playback change");
        }

        let last_visible = layout.last_visible_index(self.app_state.scroll, areas.feed.height);
        maybe_start_load_more(&mut self.app_state, last_visible, now);

        let countdown = self.app_state.countdown_remaining(now);
        self.terminal.draw(|frame| {
            screen::render_screen(frame, &self.app_state, &layout, countdown);
        })?;

        Ok(())
    }

    /// Current feed geometry for the pure handlers.
    ///
    /// Uses the area cached by the last draw; before the first draw it is
    /// derived from the terminal size.
    fn feed_area(&self) -> Rect {
        if let Some(area) = self.last_feed_area {
            return area;
        }
        let size = match self.terminal.size() {
            Ok(size) => size,
            Err(_) => ratatui::layout::Size {
                width: 80,
                height: 24,
            },
        };
        screen::screen_areas(Rect::new(0, 0, size.width.max(1), size.height)).feed
    }

    fn feed_layout(&self, feed: Rect) -> FeedLayout {
        FeedLayout::build(
            self.app_state.cards(),
            self.app_state.columns,
            ViewportDimensions::new(feed.width.max(1), feed.height),
        )
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the
// crate. They are gated with cfg to ensure they're not accessible from
// outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Allows tests to construct a TuiApp over a TestBackend without going
    /// through terminal initialization. Used by the acceptance harness.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            frame_counter: 0,
            last_tab_area: None,
            last_feed_area: None,
        }
    }

    /// Get reference to app state (test-only accessor)
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    /// Handle a single mouse event (test-only accessor)
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Advance time-driven state (test-only accessor)
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn tick_test(&mut self, now: Instant) {
        tick(&mut self.app_state, now);
    }

    /// Render a single frame (test-only accessor)
    ///
    /// Runs the full draw pipeline against the TestBackend, including the
    /// exposure observation.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn render_test(&mut self, now: Instant) -> Result<(), TuiError> {
        self.draw(now)
    }

    /// Get reference to terminal (test-only accessor)
    ///
    /// Provides access to the terminal backend for buffer inspection.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.
// These delegate to the pub(crate) test helpers above.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    ///
    /// Delegates to new_for_test. Only available with bench-internals feature.
    pub fn new_for_bench(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::new_for_test(terminal, app_state, key_bindings)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    ///
    /// Delegates to handle_key_test. Only available with bench-internals feature.
    pub fn handle_key_bench(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key_test(key, now)
    }

    /// Render a single frame (benchmark-only accessor)
    ///
    /// Delegates to render_test. Only available with bench-internals feature.
    pub fn render_bench(&mut self, now: Instant) -> Result<(), TuiError> {
        self.render_test(now)
    }

    /// Get reference to terminal (benchmark-only accessor)
    ///
    /// Delegates to terminal. Only available with bench-internals feature.
    pub fn terminal_bench(&self) -> &Terminal<B> {
        self.terminal()
    }
}

/// Initialize and run the TUI application with a resolved configuration
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(
    repository: FeedRepository,
    config: &ResolvedConfig,
    tab: FeedTab,
) -> Result<(), TuiError> {
    info!(%tab, page_size = config.page_size, "starting feed browser");
    let mut app = TuiApp::new(repository, config, tab)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
