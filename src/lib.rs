//! `lrctime` - timed-lyrics (LRC) parsing and word-timing toolkit.
//!
//! Parses standard and enhanced LRC lyric text into a normalized,
//! time-ordered representation, synthesizes approximate per-word timing
//! when a format lacks it, and provides playback-side helpers for display
//! formatting and active-line lookup.

pub mod constants;
pub mod error;
pub mod loader;
pub mod parser;
pub mod timing;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_document, parse_enhanced_lrc, parse_lrc};
pub use timing::{format_time, generate_word_timestamps, line_index_at};
pub use types::{LrcDocument, LrcMetadata, LyricLine, LyricWord};
