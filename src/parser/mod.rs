//! LRC lyric-text parsing.
//!
//! Two entry points cover the two wire formats: [`parse_lrc`] for standard
//! `[mm:ss.xx]line` files and [`parse_enhanced_lrc`] for the karaoke variant
//! embedding `<mm:ss.xx>word` tags. Both are permissive by design: a line
//! that does not match the timestamp pattern is dropped, never an error, so
//! partially garbled files still yield their well-formed lines.
//!
//! [`parse_document`] wraps the enhanced parser and additionally collects
//! header ID tags (`[ti:]`, `[ar:]`, `[offset:]`, ...) into [`LrcMetadata`].

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::timing::WORD_END_PLACEHOLDER_SECS;
use crate::types::{LrcDocument, LrcMetadata, LyricLine, LyricWord};

/// Regex matching a `[mm:ss.xx]` / `[mm:ss:xxx]` line timestamp plus trailing text.
#[allow(clippy::expect_used)]
static RE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{2}):(\d{2})[.:](\d{2,3})\](.*)$").expect("valid regex: RE_LINE")
});

/// Regex matching an inline `<mm:ss.xx>` word tag and the text up to the next tag.
#[allow(clippy::expect_used)]
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(\d{2}):(\d{2})[.:](\d{2,3})>([^<]*)").expect("valid regex: RE_WORD")
});

/// Regex matching any residual `<...>` tag, for stripping.
#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("valid regex: RE_TAG")
});

/// Regex matching header ID tags like `[ti:Title]` or `[offset:+500]`.
#[allow(clippy::expect_used)]
static RE_ID_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([a-zA-Z]+):([^\]]*)\]").expect("valid regex: RE_ID_TAG")
});

/// Convert captured timestamp components to seconds.
///
/// Two fractional digits are centiseconds, three are milliseconds. No range
/// validation is performed: `seconds > 59` is accepted and combined as-is,
/// matching the permissive policy of the rest of the parser.
fn timestamp_secs(minutes: &str, seconds: &str, fraction: &str) -> f64 {
    let mins = minutes.parse::<u32>().unwrap_or(0);
    let secs = seconds.parse::<u32>().unwrap_or(0);
    let digits = fraction.parse::<u32>().unwrap_or(0);
    let millis = if fraction.len() == 3 { digits } else { digits * 10 };
    f64::from(mins) * 60.0 + f64::from(secs) + f64::from(millis) / 1000.0
}

/// Stable ascending sort by line time; equal timestamps keep input order.
fn sort_by_time(lines: &mut [LyricLine]) {
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));
}

/// Capture group as `&str`, empty when absent.
fn group<'t>(caps: &regex::Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}

/// Parse standard-format LRC text into time-ascending lines.
///
/// Lines that do not open with a `[mm:ss.xx]` timestamp are skipped.
/// Repeated-timestamp lines (`[00:10.00][00:40.00]text`) are not expanded;
/// only the leading tag is honored.
#[must_use]
pub fn parse_lrc(text: &str) -> Vec<LyricLine> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let Some(caps) = RE_LINE.captures(raw) else {
            if !raw.trim().is_empty() {
                tracing::debug!("Skipping unparseable lyric line: {raw:?}");
            }
            continue;
        };

        let time = timestamp_secs(group(&caps, 1), group(&caps, 2), group(&caps, 3));
        lines.push(LyricLine::new(time, group(&caps, 4).trim()));
    }

    sort_by_time(&mut lines);
    lines
}

/// Parse enhanced-format LRC text (`[mm:ss.xx]<mm:ss.xx>word ...`) into
/// time-ascending lines with per-word timing where available.
///
/// Each word's `end_time` is the next word's `start_time`; the last word in
/// a line keeps a `start_time + 0.5` placeholder. Line text is re-derived by
/// joining the word tokens with single spaces, so spacing outside word
/// boundaries is not preserved. A line with no surviving word tags falls
/// back to its content with all `<...>` tags stripped, and carries no words.
#[must_use]
pub fn parse_enhanced_lrc(text: &str) -> Vec<LyricLine> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let Some(caps) = RE_LINE.captures(raw) else {
            if !raw.trim().is_empty() {
                tracing::debug!("Skipping unparseable lyric line: {raw:?}");
            }
            continue;
        };

        let time = timestamp_secs(group(&caps, 1), group(&caps, 2), group(&caps, 3));
        let content = group(&caps, 4);

        let mut words = Vec::new();
        for wcaps in RE_WORD.captures_iter(content) {
            let token = group(&wcaps, 4).trim();
            if token.is_empty() {
                continue;
            }
            let start = timestamp_secs(group(&wcaps, 1), group(&wcaps, 2), group(&wcaps, 3));
            words.push(LyricWord {
                word: token.to_string(),
                start_time: start,
                end_time: start + WORD_END_PLACEHOLDER_SECS,
            });
        }

        // Each word ends where the next one begins; the last keeps its placeholder.
        let next_starts: Vec<f64> = words.iter().skip(1).map(|w| w.start_time).collect();
        for (word, next_start) in words.iter_mut().zip(next_starts) {
            word.end_time = next_start;
        }

        if words.is_empty() {
            let fallback = RE_TAG.replace_all(content, "");
            lines.push(LyricLine::new(time, fallback.trim()));
        } else {
            let joined = words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>().join(" ");
            lines.push(LyricLine { time, text: joined, words: Some(words) });
        }
    }

    sort_by_time(&mut lines);
    lines
}

/// Parse a complete LRC document: header ID tags plus enhanced-format lines.
///
/// An `[offset:]` tag is recorded in the metadata (milliseconds, sign
/// honored) but never applied to line times.
#[must_use]
pub fn parse_document(text: &str) -> LrcDocument {
    let mut metadata = LrcMetadata::default();

    for raw in text.lines() {
        let Some(caps) = RE_ID_TAG.captures(raw) else {
            continue;
        };
        let value = group(&caps, 2).trim();
        match group(&caps, 1).to_ascii_lowercase().as_str() {
            "ti" => metadata.title = Some(value.to_string()),
            "ar" => metadata.artist = Some(value.to_string()),
            "al" => metadata.album = Some(value.to_string()),
            "by" => metadata.author = Some(value.to_string()),
            "offset" => {
                metadata.offset_ms = value.trim_start_matches('+').parse::<i64>().ok();
            }
            _ => {}
        }
    }

    LrcDocument { metadata, lines: parse_enhanced_lrc(text) }
}
