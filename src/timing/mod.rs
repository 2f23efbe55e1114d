//! Playback-side timing helpers.
//!
//! Covers the cases the parsers cannot: synthesizing approximate per-word
//! timing for standard-format lines, formatting positions for display, and
//! locating the active line for a playback position.

use crate::constants::timing::FALLBACK_LINE_DURATION_SECS;
use crate::types::{LyricLine, LyricWord};

/// Synthesize evenly-spaced word timing for a line that lacks it.
///
/// The line's text is split on whitespace and its display duration
/// (`next_line_time - line.time`, or 5 seconds when no next line is known)
/// is partitioned equally across the tokens. This is a strict equal split:
/// no per-word length weighting and no minimum duration floor. A
/// `next_line_time` earlier than the line's own time produces negative
/// slices; callers sourcing times from unsorted data should sort first.
#[must_use]
pub fn generate_word_timestamps(line: &LyricLine, next_line_time: Option<f64>) -> Vec<LyricWord> {
    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    let duration = next_line_time.map_or(FALLBACK_LINE_DURATION_SECS, |next| next - line.time);
    #[allow(clippy::cast_precision_loss)]
    let word_duration = duration / tokens.len() as f64;

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * word_duration;
            LyricWord {
                word: (*token).to_string(),
                start_time: line.time + offset,
                end_time: line.time + offset + word_duration,
            }
        })
        .collect()
}

/// Format a position in seconds as `M:SS` for display.
///
/// Fractional seconds truncate rather than round; minutes carry no leading
/// zero. Negative input clamps to `"0:00"`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if seconds.is_sign_negative() || seconds.is_nan() {
        0
    } else {
        seconds as u64
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Index of the line active at `position` seconds, assuming `lines` is
/// sorted ascending by time (as the parsers return them).
///
/// Returns the last line whose `time <= position`, or `None` before the
/// first line (or for an empty slice).
#[must_use]
pub fn line_index_at(lines: &[LyricLine], position: f64) -> Option<usize> {
    let idx = lines.partition_point(|l| l.time <= position);
    idx.checked_sub(1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;
    use crate::types::LyricLine;

    #[test]
    fn test_even_split() {
        let line = LyricLine::new(0.0, "a b c d");
        let words = generate_word_timestamps(&line, Some(4.0));
        assert_eq!(words.len(), 4);
        assert_eq!(words[2].start_time, 2.0);
        assert_eq!(words[2].end_time, 3.0);
        assert_eq!(words[3].end_time, 4.0);
    }

    #[test]
    fn test_fallback_duration_is_five_seconds() {
        let line = LyricLine::new(10.0, "a b c d e");
        let words = generate_word_timestamps(&line, None);
        assert_eq!(words.len(), 5);
        assert_eq!(words[0].start_time, 10.0);
        assert_eq!(words[0].end_time, 11.0);
        assert_eq!(words[4].end_time, 15.0);
    }

    #[test]
    fn test_empty_text_yields_no_words() {
        let line = LyricLine::new(0.0, "   ");
        assert!(generate_word_timestamps(&line, Some(4.0)).is_empty());
    }

    #[test]
    fn test_negative_duration_passes_through() {
        // Times from unsorted data are not clamped; the slices run backwards.
        let line = LyricLine::new(10.0, "a b");
        let words = generate_word_timestamps(&line, Some(8.0));
        assert_eq!(words[0].start_time, 10.0);
        assert_eq!(words[0].end_time, 9.0);
        assert_eq!(words[1].end_time, 8.0);
    }

    #[test]
    fn test_format_time_basic() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(5.0), "0:05");
    }

    #[test]
    fn test_format_time_truncates() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.0), "1:00");
    }

    #[test]
    fn test_format_time_negative_clamps_to_zero() {
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn test_line_index_lookup() {
        let lines = vec![
            LyricLine::new(0.0, "a"),
            LyricLine::new(10.0, "b"),
            LyricLine::new(20.0, "c"),
        ];
        assert_eq!(line_index_at(&lines, 0.0), Some(0));
        assert_eq!(line_index_at(&lines, 9.99), Some(0));
        assert_eq!(line_index_at(&lines, 10.0), Some(1));
        assert_eq!(line_index_at(&lines, 500.0), Some(2));
    }

    #[test]
    fn test_line_index_before_first_line() {
        let lines = vec![LyricLine::new(5.0, "a")];
        assert_eq!(line_index_at(&lines, 2.0), None);
        assert_eq!(line_index_at(&[], 2.0), None);
    }
}
