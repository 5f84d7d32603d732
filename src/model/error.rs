//! Error types for the feedtui application.
//!
//! Hierarchical error taxonomy using `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`FeedError`] - Fixture/cache loading failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! Feed errors are fatal at startup (no data to show) but non-fatal at
//! runtime: a failed refresh keeps the current feed and surfaces the error
//! on the status line. Per-card fixture entries that fail to parse are
//! skipped with a warning, never aborting the whole load. Terminal errors
//! are always fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific error types convert automatically via `From`, enabling
/// clean propagation with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load feed data from the fixture or cache.
    ///
    /// **Recovery**: fatal at startup (nothing to render). During a refresh
    /// the shell catches this before it reaches `AppError` and shows a
    /// status-line notice instead, keeping the stale feed on screen.
    #[error("Failed to load feed: {0}")]
    Feed(#[from] FeedError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer: resize failures, broken
    /// pipes, I/O errors during rendering.
    ///
    /// **Recovery**: restore the terminal, write the message to stderr,
    /// exit nonzero.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading feed data.
///
/// The repository reads a JSON fixture (bundled or `--fixture` path),
/// falling back to the on-disk cache when the fixture is unavailable.
/// Variants carry enough context (paths, parser messages) to render a
/// useful status-line notice.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A fixture or cache file could not be read.
    ///
    /// **Recovery**: the repository tries the cache next; only if that also
    /// fails does the error surface.
    #[error("Failed to read feed data from {path}: {source}")]
    Read {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The feed document is not valid JSON or not an object of card arrays.
    ///
    /// Individual malformed cards inside a valid document are skipped with
    /// a warning instead of raising this; this variant means the document
    /// itself is unusable.
    ///
    /// **Recovery**: the repository tries the cache next.
    #[error("Malformed feed data: {message}")]
    Parse {
        /// Parser error message, extracted from `serde_json::Error`.
        message: String,
    },

    /// Neither the fixture nor the cache produced any feed data.
    ///
    /// The terminal analog of "network error, and nothing cached".
    ///
    /// **Recovery**: fatal at startup; on refresh, shown as a status-line
    /// error while the existing feed stays usable.
    #[error("No feed data available (fixture and cache both unavailable)")]
    NoData,
}
