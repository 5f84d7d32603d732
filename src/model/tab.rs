//! Feed tab model.

use std::fmt;
use std::str::FromStr;

/// The five feed tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedTab {
    /// Mixed stream of every card kind.
    #[default]
    All,
    /// Video cards.
    Videos,
    /// Creator/user highlight cards.
    Users,
    /// Image and text cards.
    Images,
    /// Product cards.
    Products,
}

impl FeedTab {
    /// All tabs in display order.
    pub const ALL: [FeedTab; 5] = [
        FeedTab::All,
        FeedTab::Videos,
        FeedTab::Users,
        FeedTab::Images,
        FeedTab::Products,
    ];

    /// Tab-bar label.
    pub fn label(self) -> &'static str {
        match self {
            FeedTab::All => "All",
            FeedTab::Videos => "Videos",
            FeedTab::Users => "Users",
            FeedTab::Images => "Images",
            FeedTab::Products => "Products",
        }
    }

    /// Key of this tab's card array in the feed fixture.
    pub fn fixture_key(self) -> &'static str {
        match self {
            FeedTab::All => "all",
            FeedTab::Videos => "videos",
            FeedTab::Users => "users",
            FeedTab::Images => "images",
            FeedTab::Products => "products",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        FeedTab::ALL
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }

    /// Tab at `index` in display order, if in range.
    pub fn from_index(index: usize) -> Option<FeedTab> {
        FeedTab::ALL.get(index).copied()
    }

    /// Next tab in display order, wrapping.
    pub fn next(self) -> FeedTab {
        FeedTab::ALL[(self.index() + 1) % FeedTab::ALL.len()]
    }

    /// Previous tab in display order, wrapping.
    pub fn prev(self) -> FeedTab {
        let len = FeedTab::ALL.len();
        FeedTab::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FeedTab {
    type Err = UnknownTab;

    /// Case-insensitive parse by label or fixture key (CLI `--tab`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        FeedTab::ALL
            .iter()
            .find(|t| t.fixture_key() == lower || t.label().to_ascii_lowercase() == lower)
            .copied()
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Parse failure for [`FeedTab`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown tab '{0}' (expected one of: all, videos, users, images, products)")]
pub struct UnknownTab(String);

// ===== Tests =====
