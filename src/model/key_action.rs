//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Keys for the delete-confirmation dialog (y/n/Enter/Esc) are handled
/// directly by the event loop while the dialog is open and are not
/// remappable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the feed up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the feed down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the feed. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the feed. Default: G/End
    ScrollToBottom,

    // Tab navigation
    /// Switch to the next feed tab, wrapping. Default: ]/Tab
    NextTab,
    /// Switch to the previous feed tab, wrapping. Default: [/Shift+Tab
    PrevTab,
    /// Select a feed tab by position (0-based). Default: 1-5
    SelectTab(usize),

    // Feed operations
    /// Reload page one of the current tab. Default: r
    Refresh,
    /// Toggle between single and double column layout. Default: c
    ToggleColumns,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show the help overlay with keyboard shortcuts. Default: ?
    Help,
}
