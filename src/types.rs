//! Core data model for parsed lyrics.
//!
//! All structures here are transient, pure-function outputs: they are built
//! fresh from a lyric-text string on every parse and never mutated or
//! persisted by this crate.

use serde::{Deserialize, Serialize};

/// A single lyric line with its display timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Seconds from track start when the line becomes active.
    pub time: f64,
    /// Full line text (word-joined when derived from word timings).
    pub text: String,
    /// Per-word timing, present only when the source supplied word-level
    /// timestamps or the caller synthesized them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<LyricWord>>,
}

impl LyricLine {
    /// Create a line without word-level timing.
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self { time, text: text.into(), words: None }
    }
}

/// A single timed word within a lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricWord {
    /// Token text, no surrounding whitespace.
    pub word: String,
    /// Seconds from track start when the word becomes active.
    pub start_time: f64,
    /// Seconds from track start when the word ends. Equals the next word's
    /// `start_time`, except for a line's last word which keeps the
    /// `start_time + 0.5` placeholder.
    pub end_time: f64,
}

/// ID tags collected from an LRC file header (`[ti:]`, `[ar:]`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LrcMetadata {
    /// Track title (`[ti:]`).
    pub title: Option<String>,
    /// Performing artist (`[ar:]`).
    pub artist: Option<String>,
    /// Album name (`[al:]`).
    pub album: Option<String>,
    /// File author (`[by:]`).
    pub author: Option<String>,
    /// Global timing offset in milliseconds (`[offset:]`), sign honored.
    ///
    /// Recorded as-is; line times are never shifted by it automatically.
    pub offset_ms: Option<i64>,
}

impl LrcMetadata {
    /// Whether no ID tags were present at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.author.is_none()
            && self.offset_ms.is_none()
    }
}

/// A fully parsed LRC document: header metadata plus timed lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LrcDocument {
    /// Header ID tags, all optional.
    pub metadata: LrcMetadata,
    /// Timed lines, sorted ascending by `time`.
    pub lines: Vec<LyricLine>,
}
