//! Card chrome and status-line styling.
//!
//! Each card kind gets a distinct border color so kinds read at a glance.
//! With colors disabled everything falls back to the terminal default.

use crate::model::CardKind;
use crate::state::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styling for card borders, the playing banner, notices, and key hints.
#[derive(Debug, Clone)]
pub struct CardStyles {
    text_card: Style,
    image_card: Style,
    video_card: Style,
    product_card: Style,
    loading_card: Style,
    playing: Style,
    tab_highlight: Style,
    info_notice: Style,
    error_notice: Style,
    hint: Style,
}

impl CardStyles {
    /// Create styles honoring the `NO_COLOR` environment variable.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles for an explicit color configuration.
    ///
    /// With colors disabled, only non-color attributes survive (the
    /// selected tab stays readable via REVERSED).
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                text_card: Style::default().fg(Color::White),
                image_card: Style::default().fg(Color::Magenta),
                video_card: Style::default().fg(Color::Green),
                product_card: Style::default().fg(Color::Yellow),
                loading_card: Style::default().fg(Color::DarkGray),
                playing: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                tab_highlight: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                info_notice: Style::default().fg(Color::Cyan),
                error_notice: Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                hint: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                text_card: Style::default(),
                image_card: Style::default(),
                video_card: Style::default(),
                product_card: Style::default(),
                loading_card: Style::default(),
                playing: Style::default(),
                tab_highlight: Style::default().add_modifier(Modifier::REVERSED),
                info_notice: Style::default(),
                error_notice: Style::default(),
                hint: Style::default(),
            }
        }
    }

    /// Border style for a card kind.
    pub fn style_for_kind(&self, kind: CardKind) -> Style {
        match kind {
            CardKind::Text => self.text_card,
            CardKind::Image => self.image_card,
            CardKind::Video => self.video_card,
            CardKind::Product => self.product_card,
            CardKind::Loading => self.loading_card,
        }
    }

    /// Style for the playing card's border and banner.
    pub fn playing_style(&self) -> Style {
        self.playing
    }

    /// Highlight style for the selected tab.
    pub fn tab_highlight_style(&self) -> Style {
        self.tab_highlight
    }

    /// Style for a status-line notice of the given severity.
    pub fn style_for_notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => self.info_notice,
            NoticeLevel::Error => self.error_notice,
        }
    }

    /// Dim style for the key-hint tail of the status line.
    pub fn hint_style(&self) -> Style {
        self.hint
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
