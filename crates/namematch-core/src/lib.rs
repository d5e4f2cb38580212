//! namematch core engine
//!
//! Decides whether differently formatted name strings denote the same person
//! and, when they do, produces one canonical merged name.
//!
//! - [`distance`] - weighted Damerau-Levenshtein edit distance
//! - [`chunk`] - name tokens, alias tables, chunk equivalence
//! - [`strip`] - honorific prefix/suffix patterns
//! - [`normalize`] - raw name to ordered chunks
//! - [`matcher`] - greedy folding of candidates into a canonical name
//! - [`config`] - serializable configuration compiled into a matcher
//! - [`json`] - JSON-in, JSON-out entry points
//!
//! Everything is synchronous and free of global state. Compiled matchers are
//! immutable and can be shared between threads.
//!
//! # Example
//!
//! ```rust
//! use namematch_core::{match_names, MatchConfig};
//!
//! let config = MatchConfig::new()
//!     .with_prefix_words(["Doctor"])
//!     .with_suffix_words(["MD", "PhD"])
//!     .with_alias("bob", "Robert");
//!
//! let name = match_names(
//!     "ODONNELL, ROBERT",
//!     &["Bob Odonnell", "Doctor Robert S O'Donnell M.D."],
//!     &config,
//! )
//! .unwrap();
//! assert_eq!(name.as_deref(), Some("Robert S O'Donnell"));
//! ```

pub mod chunk;
pub mod config;
pub mod distance;
pub mod error;
pub mod json;
pub mod matcher;
pub mod normalize;
pub mod strip;

// Re-export main types at crate root
pub use chunk::{comparison_key, match_chunk, AliasTable, Chunk, ChunkMatcher};
pub use config::MatchConfig;
pub use distance::{distance, EditCosts};
pub use error::{MatchError, MatchResult, StripRole};
pub use json::{distance_json, match_names_json, normalize_name_json};
pub use matcher::NameMatcher;
pub use normalize::{normalize_name, NameNormalizer, NameRecord};
pub use strip::StripPattern;

/// Compile `config` and fold `candidates` into `base`.
///
/// `Ok(None)` means the names do not match. `Err` is only returned for
/// configuration that cannot be compiled.
pub fn match_names<S: AsRef<str>>(
    base: &str,
    candidates: &[S],
    config: &MatchConfig,
) -> MatchResult<Option<String>> {
    Ok(config.compile()?.match_names(base, candidates))
}
