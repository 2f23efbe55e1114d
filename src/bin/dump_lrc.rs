//! Debug tool to dump parsed `.lrc` files.
//!
//! Usage:
//!   `cargo run --bin dump_lrc -- <file.lrc>`
//!   `cargo run --bin dump_lrc -- <file.lrc> --json`
//!   `cargo run --bin dump_lrc -- <file.lrc> --words`
//!
//! `--words` synthesizes per-word timing for lines that lack it, bounded by
//! the following line's timestamp. Useful for checking karaoke highlighting
//! against a source file.

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::env;
use std::path::Path;

use lrctime::loader::load_lrc_file;
use lrctime::{format_time, generate_word_timestamps, LrcDocument};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <file.lrc> [--json] [--words]", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let mut doc = load_document(path);

    if args.contains(&"--words".to_string()) {
        synthesize_missing_words(&mut doc);
    }

    if args.contains(&"--json".to_string()) {
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
    } else {
        dump_document(path, &doc);
    }
}

fn load_document(path: &Path) -> LrcDocument {
    load_lrc_file(path).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {e}", path.display());
        std::process::exit(1);
    })
}

/// Fill in word timing for lines that have none, bounded by the next line.
fn synthesize_missing_words(doc: &mut LrcDocument) {
    let next_times: Vec<Option<f64>> = (0..doc.lines.len())
        .map(|i| doc.lines.get(i + 1).map(|l| l.time))
        .collect();

    for (line, next_time) in doc.lines.iter_mut().zip(next_times) {
        if line.words.is_none() {
            let words = generate_word_timestamps(line, next_time);
            if !words.is_empty() {
                line.words = Some(words);
            }
        }
    }
}

fn dump_document(path: &Path, doc: &LrcDocument) {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║ LRC File Analysis: {}", path.file_name().unwrap().to_string_lossy());
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    println!("📄 METADATA");
    println!("├─ Title:  {:?}", doc.metadata.title);
    println!("├─ Artist: {:?}", doc.metadata.artist);
    println!("├─ Album:  {:?}", doc.metadata.album);
    println!("├─ By:     {:?}", doc.metadata.author);
    println!("└─ Offset: {:?} ms", doc.metadata.offset_ms);
    println!();

    println!("🎵 LINES ({} total)", doc.lines.len());
    for (i, line) in doc.lines.iter().enumerate() {
        let is_last = i == doc.lines.len() - 1;
        let prefix = if is_last { "└" } else { "├" };
        let child_prefix = if is_last { " " } else { "│" };

        println!("{prefix}─ [{}] \"{}\"", format_time(line.time), line.text);

        if let Some(words) = &line.words {
            for (j, word) in words.iter().enumerate() {
                let word_prefix = if j == words.len() - 1 { "└" } else { "├" };
                println!("{child_prefix}  {word_prefix}─ {:>8.3} → {:>8.3}  \"{}\"",
                    word.start_time, word.end_time, word.word);
            }
        }
    }
}
