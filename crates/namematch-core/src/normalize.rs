//! Raw name string to ordered chunks
//!
//! Steps, in order:
//!
//! 1. strip the configured prefix words
//! 2. strip the configured suffix words
//! 3. "Last, First" becomes "First Last" when there is exactly one comma
//! 4. split on whitespace, then `-`, then `.`, dropping empty pieces
//!
//! Apostrophes never split a chunk: "O'Donnell" stays whole.

use crate::chunk::Chunk;
use crate::strip::StripPattern;
use std::fmt;

/// Ordered chunks of one name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRecord {
    chunks: Vec<Chunk>,
}

impl NameRecord {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk texts in order
    pub fn texts(&self) -> Vec<String> {
        self.chunks.iter().map(|c| c.text().to_string()).collect()
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.chunks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(chunk.text())?;
        }
        Ok(())
    }
}

impl FromIterator<Chunk> for NameRecord {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Splits names into chunks after stripping titles
#[derive(Debug, Clone, Default)]
pub struct NameNormalizer {
    prefix: Option<StripPattern>,
    suffix: Option<StripPattern>,
}

impl NameNormalizer {
    pub fn new(prefix: Option<StripPattern>, suffix: Option<StripPattern>) -> Self {
        Self { prefix, suffix }
    }

    pub fn prefix(&self) -> Option<&StripPattern> {
        self.prefix.as_ref()
    }

    pub fn suffix(&self) -> Option<&StripPattern> {
        self.suffix.as_ref()
    }

    pub fn normalize(&self, raw: &str) -> NameRecord {
        normalize_with(raw, self.prefix.as_ref(), self.suffix.as_ref())
    }
}

/// Normalize `raw` into chunk texts using the given strip patterns
pub fn normalize_name(
    raw: &str,
    prefix: Option<&StripPattern>,
    suffix: Option<&StripPattern>,
) -> Vec<String> {
    normalize_with(raw, prefix, suffix).texts()
}

fn normalize_with(
    raw: &str,
    prefix: Option<&StripPattern>,
    suffix: Option<&StripPattern>,
) -> NameRecord {
    let mut name = raw.to_string();
    if let Some(prefix) = prefix {
        name = prefix.strip(&name).into_owned();
    }
    if let Some(suffix) = suffix {
        name = suffix.strip(&name).into_owned();
    }

    let name = swap_last_first(&name);

    name.split_whitespace()
        .flat_map(|piece| piece.split('-'))
        .flat_map(|piece| piece.split('.'))
        .filter(|piece| !piece.is_empty())
        .map(Chunk::new)
        .collect()
}

/// "Last, First" -> "First Last". Other comma counts are left alone.
fn swap_last_first(name: &str) -> String {
    let parts: Vec<&str> = name.split(',').collect();
    match parts.as_slice() {
        [last, first] => format!("{} {}", first.trim(), last.trim()),
        _ => name.to_string(),
    }
}
