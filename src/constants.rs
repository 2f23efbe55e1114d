//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Word-timing constants.
pub mod timing {
    /// Placeholder word duration in seconds, used for a line's last word
    /// when no following word timestamp exists to correct it.
    pub const WORD_END_PLACEHOLDER_SECS: f64 = 0.5;

    /// Display duration in seconds assumed for a line when no next-line
    /// timestamp is available to bound word-timing synthesis.
    pub const FALLBACK_LINE_DURATION_SECS: f64 = 5.0;
}
