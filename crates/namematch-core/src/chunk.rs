//! Name chunks and chunk-level equivalence
//!
//! A chunk is one token of a name: a given name, a surname, an initial.
//! Two chunks are compared through their comparison keys (lower-cased, with
//! `.` and `'` removed), optionally after expanding informal forms through an
//! [`AliasTable`].
//!
//! # Example
//!
//! ```rust
//! use namematch_core::chunk::{match_chunk, AliasTable};
//!
//! let aliases = AliasTable::new().with("bob", "Robert");
//! assert_eq!(match_chunk("Bob", "R", &aliases).as_deref(), Some("Robert"));
//! assert_eq!(match_chunk("John", "Fred", &aliases), None);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reduce a chunk to the form used for equivalence checks
pub fn comparison_key(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '.' && *c != '\'')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single name token with its precomputed comparison key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    text: String,
    key: String,
}

impl Chunk {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let key = comparison_key(&text);
        Self { text, key }
    }

    /// The chunk as written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased, `.` and `'` stripped
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Expansions for informal name forms, keyed by comparison key.
///
/// Keys are reduced with [`comparison_key`] on insertion, so lookups are
/// case-insensitive and ignore `.` and `'`. Iteration order is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, alias: &str, expansion: impl Into<String>) -> Self {
        self.insert(alias, expansion);
        self
    }

    pub fn insert(&mut self, alias: &str, expansion: impl Into<String>) {
        self.entries.insert(comparison_key(alias), expansion.into());
    }

    /// Look up by an already-computed comparison key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add every entry of `other`, replacing existing expansions
    pub fn extend(&mut self, other: &AliasTable) {
        for (key, expansion) in other.iter() {
            self.entries.insert(key.to_string(), expansion.to_string());
        }
    }
}

impl From<BTreeMap<String, String>> for AliasTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<AliasTable> for BTreeMap<String, String> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (alias, expansion) in iter {
            table.insert(alias.as_ref(), expansion);
        }
        table
    }
}

/// Equal, or one is a prefix of the other (initials, truncations)
fn keys_related(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// At least one cased character and no lower-case ones
fn is_all_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// First letter upper-case, every other letter lower-case.
///
/// Intentionally blunt: "MCDONALD" becomes "Mcdonald".
fn recase(text: &str) -> String {
    let mut recased = String::with_capacity(text.len());
    let mut seen_letter = false;
    for c in text.chars() {
        if !seen_letter && c.is_alphabetic() {
            seen_letter = true;
            recased.extend(c.to_uppercase());
        } else {
            recased.extend(c.to_lowercase());
        }
    }
    recased
}

/// Chunk equivalence under a fixed alias table
#[derive(Debug, Clone, Copy)]
pub struct ChunkMatcher<'a> {
    aliases: &'a AliasTable,
}

impl<'a> ChunkMatcher<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Return the canonical chunk if `a` and `b` denote the same name part.
    ///
    /// The canonical chunk is the longer of the two after alias expansion,
    /// `a` on a tie. All-caps results are re-cased.
    pub fn match_chunks(&self, a: &str, b: &str) -> Option<String> {
        let key_a = comparison_key(a);
        let key_b = comparison_key(b);

        let (text_a, alias_key_a) = self.expand(a, &key_a);
        let (text_b, alias_key_b) = self.expand(b, &key_b);

        let equivalent =
            a == b || keys_related(&key_a, &key_b) || keys_related(&alias_key_a, &alias_key_b);
        if !equivalent {
            return None;
        }

        let canonical = if text_b.chars().count() > text_a.chars().count() {
            text_b
        } else {
            text_a
        };

        Some(if is_all_upper(canonical) {
            recase(canonical)
        } else {
            canonical.to_string()
        })
    }

    fn expand<'t>(&'t self, text: &'t str, key: &str) -> (&'t str, String) {
        match self.aliases.get(key) {
            Some(expansion) => (expansion, comparison_key(expansion)),
            None => (text, key.to_string()),
        }
    }
}

/// Convenience wrapper around [`ChunkMatcher::match_chunks`]
pub fn match_chunk(a: &str, b: &str, aliases: &AliasTable) -> Option<String> {
    ChunkMatcher::new(aliases).match_chunks(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> AliasTable {
        AliasTable::new().with("bob", "Robert")
    }

    #[test]
    fn comparison_key_strips_marks() {
        assert_eq!(comparison_key("O'Donnell"), "odonnell");
        assert_eq!(comparison_key("M.D."), "md");
        assert_eq!(comparison_key("Scott-Smith"), "scott-smith");
    }

    #[test]
    fn chunk_carries_key() {
        let chunk = Chunk::new("O'Donnell");
        assert_eq!(chunk.text(), "O'Donnell");
        assert_eq!(chunk.key(), "odonnell");
        assert_eq!(chunk.to_string(), "O'Donnell");
    }

    #[test]
    fn case_insensitive_match() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("Robert", "robert", &none).as_deref(), Some("Robert"));
    }

    #[test]
    fn initial_matches_full_name() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("Robert", "R", &none).as_deref(), Some("Robert"));
        assert_eq!(match_chunk("R", "Robert", &none).as_deref(), Some("Robert"));
        assert_eq!(match_chunk("R.", "Robert", &none).as_deref(), Some("Robert"));
    }

    #[test]
    fn alias_expansion() {
        let aliases = bob();
        assert_eq!(match_chunk("Bob", "R", &aliases).as_deref(), Some("Robert"));
        assert_eq!(match_chunk("Robert", "Bob", &aliases).as_deref(), Some("Robert"));
        assert_eq!(match_chunk("BOB", "Robert", &aliases).as_deref(), Some("Robert"));
    }

    #[test]
    fn alias_keys_are_case_insensitive() {
        let aliases = AliasTable::new().with("B.O.B.", "Robert");
        assert_eq!(aliases.get("bob"), Some("Robert"));
        assert_eq!(match_chunk("Bob", "Robert", &aliases).as_deref(), Some("Robert"));
    }

    #[test]
    fn unrelated_chunks() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("John", "Fred", &none), None);
        assert_eq!(match_chunk("John", "Jake", &none), None);
        assert_eq!(match_chunk("Bob", "Robert", &none), None);
    }

    #[test]
    fn longer_chunk_wins() {
        let none = AliasTable::new();
        assert_eq!(
            match_chunk("ODonnell", "O'Donnell", &none).as_deref(),
            Some("O'Donnell")
        );
    }

    #[test]
    fn tie_keeps_first_argument() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("ODonnell", "Odonnell", &none).as_deref(), Some("ODonnell"));
        assert_eq!(match_chunk("Odonnell", "ODonnell", &none).as_deref(), Some("Odonnell"));
    }

    #[test]
    fn all_caps_is_recased() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("SCOTT", "Scott", &none).as_deref(), Some("Scott"));
        assert_eq!(match_chunk("ODONNELL", "O", &none).as_deref(), Some("Odonnell"));
        assert_eq!(match_chunk("O'DONNELL", "O", &none).as_deref(), Some("O'donnell"));
    }

    #[test]
    fn recase_skips_leading_non_letters() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("'TIS", "'T", &none).as_deref(), Some("'Tis"));
        assert_eq!(recase("'TIS"), "'Tis");
        assert_eq!(recase("..."), "...");
        assert_eq!(recase(""), "");
    }

    #[test]
    fn mixed_case_is_kept() {
        let none = AliasTable::new();
        assert_eq!(match_chunk("McDonald", "m", &none).as_deref(), Some("McDonald"));
    }

    #[test]
    fn reflexive() {
        let aliases = bob();
        for name in ["Robert", "R", "O'Donnell", "Bob", "SCOTT"] {
            assert!(match_chunk(name, name, &aliases).is_some(), "{}", name);
        }
    }

    #[test]
    fn alias_table_from_map_normalizes_keys() {
        let mut map = BTreeMap::new();
        map.insert("BOB".to_string(), "Robert".to_string());
        let table = AliasTable::from(map);
        assert_eq!(table.get("bob"), Some("Robert"));
        assert_eq!(table.len(), 1);
    }
}
