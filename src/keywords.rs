use std::{collections::HashSet, fs, path::Path};

use crate::{
    error::{Error, Result},
    tokenizer::is_field_separator,
};

pub type KeywordSet = HashSet<String>;

/// Reads a whitespace-delimited keyword list. Entries are lower-cased but
/// otherwise kept verbatim, punctuation included.
pub fn load(path: &Path) -> Result<KeywordSet> {
    let bytes = fs::read(path).map_err(|e| Error::io("read keywords file", path, e))?;

    let keywords = parse(&bytes);
    log::debug!("Parsed {} keywords from {}", keywords.len(), path.display());

    Ok(keywords)
}

pub fn parse(bytes: &[u8]) -> KeywordSet {
    bytes
        .split(|&b| is_field_separator(b))
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).to_ascii_lowercase())
        .collect()
}
