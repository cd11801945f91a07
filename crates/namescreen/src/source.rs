//! Line-oriented text sources for blacklist entries and noise words

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// Read a UTF-8 text file as one entry per line.
///
/// Line terminators (`\n`, `\r\n`) are trimmed and source order is kept. A
/// trailing newline does not produce an empty last entry, but blank lines
/// inside the file are returned as empty entries. The file is read in full
/// before anything is returned, so a failed read never yields a partial list.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = split_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "source loaded");
    Ok(lines)
}

/// Split already-loaded text the same way [`read_lines`] splits a file
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix(BOM)
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}
