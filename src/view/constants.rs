//! Layout constants shared across view components.

/// Height of the tab bar in rows (border + labels + border).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Help popup width as a percentage of the terminal width.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Help popup height as a percentage of the terminal height.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Delete confirmation dialog width in columns.
pub const DIALOG_WIDTH: u16 = 46;

/// Delete confirmation dialog height in rows.
pub const DIALOG_HEIGHT: u16 = 7;
