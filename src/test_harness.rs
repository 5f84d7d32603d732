//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Time is simulated: the harness owns a clock that only moves
//! when a test calls [`AcceptanceTestHarness::advance`], so fetch latency and
//! the autoplay countdown are deterministic.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::FeedTab;
use crate::repo::FeedRepository;
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep assertions clean.
#[allow(dead_code)]
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    #[allow(dead_code)] // Stored for potential future use
    width: u16,
    #[allow(dead_code)] // Stored for potential future use
    height: u16,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a fixture JSON document with default terminal size (80x24),
    /// default config, and the All tab selected.
    ///
    /// # Errors
    /// Returns `TuiError` if the fixture cannot be parsed.
    #[allow(dead_code)]
    pub fn from_fixture_json(json: &str) -> Result<Self, TuiError> {
        Self::from_fixture_json_with_size(json, 80, 24)
    }

    /// Load a fixture JSON document with a custom terminal size.
    ///
    /// # Errors
    /// Returns `TuiError` if the fixture cannot be parsed.
    pub fn from_fixture_json_with_size(
        json: &str,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        Self::from_fixture_json_with_config(json, width, height, &ResolvedConfig::default())
    }

    /// Load a fixture JSON document with a custom size and config.
    ///
    /// Tests exercising pagination or fetch latency pass a config with a
    /// small `page_size` or `refresh_ms` here.
    ///
    /// # Errors
    /// Returns `TuiError` if the fixture cannot be parsed.
    pub fn from_fixture_json_with_config(
        json: &str,
        width: u16,
        height: u16,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let repository =
            FeedRepository::from_json(json).map_err(crate::model::AppError::from)?;
        let app_state = AppState::new(repository, config, FeedTab::All);
        let key_bindings = KeyBindings::default();

        let app = TuiApp::new_for_test(terminal, app_state, key_bindings);

        Ok(Self {
            app,
            width,
            height,
            now: Instant::now(),
            running: true,
        })
    }

    /// Current simulated time.
    #[allow(dead_code)]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advance the simulated clock and run a timer tick, like the event
    /// loop's poll timeout does. Pending fetches whose latency has elapsed
    /// complete here.
    #[allow(dead_code)]
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
        self.app.tick_test(self.now);
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event, self.now);

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Send a left mouse click at the specified coordinates
    ///
    /// Renders first so the click lands on the layout currently on screen.
    #[allow(dead_code)]
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        // Render first to ensure layout is calculated
        let _ = self.app.render_test(self.now);

        let mouse_event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        self.app.handle_mouse_test(mouse_event);
    }

    /// Send a mouse wheel scroll down event
    #[allow(dead_code)]
    pub fn wheel_down(&mut self) {
        self.wheel(MouseEventKind::ScrollDown);
    }

    /// Send a mouse wheel scroll up event
    #[allow(dead_code)]
    pub fn wheel_up(&mut self) {
        self.wheel(MouseEventKind::ScrollUp);
    }

    fn wheel(&mut self, kind: MouseEventKind) {
        if !self.running {
            return;
        }
        let _ = self.app.render_test(self.now);
        let mouse_event = MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(mouse_event);
    }

    /// Access app state for assertions
    ///
    /// Provides read-only access to AppState for verifying state transitions.
    #[allow(dead_code)]
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't crash/quit)
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// Runs the full draw pipeline (including exposure observation) against
    /// the TestBackend and returns the buffer contents as a string.
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    #[allow(dead_code)]
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test(self.now)
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
