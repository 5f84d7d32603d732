//! Discrete exposure states and the fraction classifier.

use std::fmt;

/// How much of a tracked card is on screen, as a discrete state.
///
/// Variants are ordered by increasing visibility, so `Ord` comparisons
/// express "at least as visible as":
///
/// ```
/// use feedtui::exposure::ExposureState;
///
/// assert!(ExposureState::Disappeared < ExposureState::Visible);
/// assert!(ExposureState::Visible < ExposureState::Visible50);
/// assert!(ExposureState::Visible50 < ExposureState::FullyVisible);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExposureState {
    /// Nothing of the card is inside the viewport.
    Disappeared,
    /// More than zero but less than half visible.
    Visible,
    /// At least half but not entirely visible.
    Visible50,
    /// The entire extent is inside the viewport.
    FullyVisible,
}

impl ExposureState {
    /// Classify a visibility fraction into a discrete state.
    ///
    /// Thresholds, inclusive on the lower bound of each band:
    /// - `f <= 0.0` → `Disappeared`
    /// - `0.0 < f < 0.5` → `Visible`
    /// - `0.5 <= f < 1.0` → `Visible50`
    /// - `f >= 1.0` → `FullyVisible`
    ///
    /// The fraction is clamped to `[0, 1]` first to tolerate floating-point
    /// overshoot from the sampler. Non-finite input classifies as
    /// `Disappeared`.
    ///
    /// ```
    /// use feedtui::exposure::ExposureState;
    ///
    /// assert_eq!(ExposureState::classify(0.0), ExposureState::Disappeared);
    /// assert_eq!(ExposureState::classify(0.25), ExposureState::Visible);
    /// assert_eq!(ExposureState::classify(0.5), ExposureState::Visible50);
    /// assert_eq!(ExposureState::classify(1.0), ExposureState::FullyVisible);
    /// ```
    pub fn classify(fraction: f32) -> ExposureState {
        if !fraction.is_finite() {
            return ExposureState::Disappeared;
        }
        let f = fraction.clamp(0.0, 1.0);
        if f <= 0.0 {
            ExposureState::Disappeared
        } else if f < 0.5 {
            ExposureState::Visible
        } else if f < 1.0 {
            ExposureState::Visible50
        } else {
            ExposureState::FullyVisible
        }
    }
}

impl fmt::Display for ExposureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExposureState::Disappeared => "disappeared",
            ExposureState::Visible => "visible",
            ExposureState::Visible50 => "visible-50",
            ExposureState::FullyVisible => "fully-visible",
        };
        write!(f, "{label}")
    }
}

// ===== Tests =====
