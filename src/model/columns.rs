//! Column mode of the staggered feed grid.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How many lanes the feed lays half-span cards into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    /// One lane; every card renders full width.
    Single,
    /// Two staggered lanes with a one-column gutter.
    #[default]
    Double,
}

impl ColumnMode {
    /// Lane count for the layout engine.
    pub fn lanes(self) -> u8 {
        match self {
            ColumnMode::Single => 1,
            ColumnMode::Double => 2,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> ColumnMode {
        match self {
            ColumnMode::Single => ColumnMode::Double,
            ColumnMode::Double => ColumnMode::Single,
        }
    }
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnMode::Single => "single",
            ColumnMode::Double => "double",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ColumnMode {
    type Err = UnknownColumnMode;

    /// Case-insensitive parse (CLI `--columns`, `FEEDTUI_COLUMNS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(ColumnMode::Single),
            "double" => Ok(ColumnMode::Double),
            _ => Err(UnknownColumnMode(s.to_string())),
        }
    }
}

/// Parse failure for [`ColumnMode`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown column mode '{0}' (expected 'single' or 'double')")]
pub struct UnknownColumnMode(String);

// ===== Tests =====
