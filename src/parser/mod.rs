//! Parser module: read a source file and split off its header.

pub mod decode;
pub mod header;

use crate::model::{FileEntry, Lang, ParsedFile};
use anyhow::{Context, Result};
use std::fs;

/// Read and parse one collected file.
pub fn parse_file(entry: &FileEntry) -> Result<ParsedFile> {
    let bytes =
        fs::read(&entry.path).with_context(|| format!("failed to read {}", entry.path.display()))?;

    let decoded = decode::decode(&bytes);
    if decoded.fallback {
        log::warn!(
            "{} is not valid UTF-8, decoded as GBK",
            entry.path.display()
        );
    }

    Ok(parse_source(&entry.file_name, &decoded.text))
}

/// Parse already-decoded source text.
///
/// The display name falls back to `file_name` only when the header has no
/// `name:` line; an empty `name:` yields an empty name.
pub fn parse_source(file_name: &str, text: &str) -> ParsedFile {
    let (header, body) = header::split_header(text);

    ParsedFile {
        display_name: header
            .name
            .unwrap_or_else(|| file_name.to_string()),
        description: header.description,
        body: body.trim_end().to_string(),
        lang: Lang::from_file_name(file_name),
    }
}
