//! Loading LRC documents from disk.

use std::path::Path;

use fs_err as fs;

use crate::error::{Error, Result};
use crate::parser::parse_document;
use crate::types::LrcDocument;

/// Read and parse an `.lrc` file.
///
/// IO failures carry the path for context. A file that parses to zero lines
/// is not an error; the permissive parse policy applies to files too.
pub fn load_lrc_file(path: &Path) -> Result<LrcDocument> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(e, path.to_path_buf()))?;

    let doc = parse_document(&text);
    if doc.lines.is_empty() {
        tracing::warn!("No timed lines found in {}", path.display());
    } else {
        tracing::info!("Loaded {} lyric lines from {}", doc.lines.len(), path.display());
    }

    Ok(doc)
}
