//! Integration tests exercising the public lyric-parsing API end to end.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

use lrctime::loader::load_lrc_file;
use lrctime::{
    format_time, generate_word_timestamps, line_index_at, parse_document, parse_enhanced_lrc,
    parse_lrc,
};

const STANDARD_FILE: &str = "\
[ti:An Example]
[ar:Somebody]
[offset:-120]
[00:30.00]Out of order on purpose
[00:12.50]Hello world
annotation line, no timestamp
[01:02.50]Centisecond fraction

[02:00.000]Final line";

#[test]
fn standard_file_parses_in_order() {
    let lines = parse_lrc(STANDARD_FILE);

    // Metadata and annotation lines are dropped, timed lines are sorted.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].time, 12.5);
    assert_eq!(lines[0].text, "Hello world");
    assert_eq!(lines[1].time, 30.0);
    assert_eq!(lines[3].time, 120.0);
    assert!(lines.windows(2).all(|w| w[0].time <= w[1].time));
}

#[test]
fn document_collects_metadata_and_lines() {
    let doc = parse_document(STANDARD_FILE);
    assert_eq!(doc.metadata.title.as_deref(), Some("An Example"));
    assert_eq!(doc.metadata.artist.as_deref(), Some("Somebody"));
    assert_eq!(doc.metadata.offset_ms, Some(-120));
    assert_eq!(doc.lines.len(), 4);
}

#[test]
fn enhanced_lines_carry_word_timing() {
    let input = "\
[00:10.00]<00:10.00>Hello <00:10.50>world
[00:14.00]plain follow-up line";
    let lines = parse_enhanced_lrc(input);
    assert_eq!(lines.len(), 2);

    let words = lines[0].words.as_ref().unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].end_time, words[1].start_time);
    assert!(lines[1].words.is_none());
}

#[test]
fn synthesis_covers_a_line_between_its_neighbors() {
    let lines = parse_lrc("[00:10.00]one two three four\n[00:14.00]next");
    let words = generate_word_timestamps(&lines[0], Some(lines[1].time));

    assert_eq!(words.len(), 4);
    assert_eq!(words[0].start_time, 10.0);
    assert_eq!(words[3].end_time, 14.0);
    // Slices tile the duration without gaps.
    for pair in words.windows(2) {
        assert_eq!(pair[0].end_time, pair[1].start_time);
    }
}

#[test]
fn playback_position_maps_to_line_and_display_time() {
    let lines = parse_lrc(STANDARD_FILE);

    assert_eq!(line_index_at(&lines, 0.0), None);
    assert_eq!(line_index_at(&lines, 35.0), Some(1));
    assert_eq!(format_time(lines[3].time), "2:00");
    assert_eq!(format_time(lines[0].time), "0:12");
}

#[test]
fn loader_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.lrc");
    std::fs::write(&path, STANDARD_FILE).unwrap();

    let doc = load_lrc_file(&path).unwrap();
    assert_eq!(doc.lines, parse_enhanced_lrc(STANDARD_FILE));
    assert_eq!(doc.metadata.offset_ms, Some(-120));
}
