//! Folding candidate names into a canonical name
//!
//! Each candidate is merged into the running result with a greedy first-fit
//! assignment. The longer record of the pair ("alpha", the running result on
//! a tie) offers its chunks as slots in positional order; every chunk of the
//! shorter record ("beta") takes the first free slot it matches. A beta chunk
//! with no slot rejects the candidate and ends the whole match. Unclaimed
//! alpha chunks are carried over unchanged, so extra middle names survive.

use crate::chunk::{AliasTable, Chunk, ChunkMatcher};
use crate::normalize::{NameNormalizer, NameRecord};
use tracing::{debug, trace};

/// Compiled matching configuration, reusable across calls and threads
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    aliases: AliasTable,
    normalizer: NameNormalizer,
}

impl NameMatcher {
    pub fn new(aliases: AliasTable, normalizer: NameNormalizer) -> Self {
        Self {
            aliases,
            normalizer,
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    /// Fold `candidates` into `base` in order.
    ///
    /// Returns the canonical name, or `None` as soon as one candidate fails.
    /// With no candidates the normalized base is returned.
    pub fn match_names<S: AsRef<str>>(&self, base: &str, candidates: &[S]) -> Option<String> {
        self.match_records(base, candidates)
            .map(|record| record.to_string())
    }

    /// Like [`NameMatcher::match_names`] but keeps the chunk structure
    pub fn match_records<S: AsRef<str>>(&self, base: &str, candidates: &[S]) -> Option<NameRecord> {
        let mut current = self.normalizer.normalize(base);

        for (index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            let record = self.normalizer.normalize(candidate);
            match self.merge(&current, &record) {
                Some(merged) => {
                    trace!(index, candidate, merged = %merged, "candidate merged");
                    current = merged;
                }
                None => {
                    debug!(index, candidate, base = %current, "candidate rejected");
                    return None;
                }
            }
        }

        Some(current)
    }

    /// Merge two normalized records.
    ///
    /// `base` is alpha unless `other` has more chunks.
    pub fn merge(&self, base: &NameRecord, other: &NameRecord) -> Option<NameRecord> {
        let (alpha, beta) = if base.len() >= other.len() {
            (base, other)
        } else {
            (other, base)
        };

        let chunk_matcher = ChunkMatcher::new(&self.aliases);
        let mut slots: Vec<Option<String>> = vec![None; alpha.len()];

        for chunk in beta.chunks() {
            let claimed = alpha
                .chunks()
                .iter()
                .zip(slots.iter_mut())
                .filter(|(_, slot)| slot.is_none())
                .find_map(|(slot_chunk, slot)| {
                    chunk_matcher
                        .match_chunks(chunk.text(), slot_chunk.text())
                        .map(|canonical| *slot = Some(canonical))
                });

            if claimed.is_none() {
                trace!(chunk = chunk.text(), "no free slot matches chunk");
                return None;
            }
        }

        Some(
            alpha
                .chunks()
                .iter()
                .zip(slots)
                .map(|(original, slot)| match slot {
                    Some(canonical) => Chunk::new(canonical),
                    None => original.clone(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StripRole;
    use crate::strip::StripPattern;
    use pretty_assertions::assert_eq;

    fn record(name: &str) -> NameRecord {
        NameNormalizer::default().normalize(name)
    }

    #[test]
    fn longer_candidate_becomes_alpha() {
        let matcher = NameMatcher::default();
        let merged = matcher
            .merge(&record("ROBERT ODONNELL"), &record("ROBERT SCOTT ODONNELL"))
            .unwrap();
        assert_eq!(merged.texts(), vec!["Robert", "SCOTT", "Odonnell"]);
    }

    #[test]
    fn extra_alpha_chunks_are_kept() {
        let matcher = NameMatcher::default();
        let merged = matcher
            .merge(&record("Jane Quincy Public"), &record("J Public"))
            .unwrap();
        assert_eq!(merged.texts(), vec!["Jane", "Quincy", "Public"]);
    }

    #[test]
    fn slots_are_used_once() {
        let matcher = NameMatcher::default();
        assert_eq!(matcher.merge(&record("Robert Smith"), &record("R R")), None);
        let merged = matcher
            .merge(&record("Robert Richard Smith"), &record("R R"))
            .unwrap();
        assert_eq!(merged.texts(), vec!["Robert", "Richard", "Smith"]);
    }

    #[test]
    fn first_fit_in_positional_order() {
        let matcher = NameMatcher::default();
        let merged = matcher
            .merge(&record("Anna Annabel"), &record("Ann"))
            .unwrap();
        assert_eq!(merged.texts(), vec!["Anna", "Annabel"]);
    }

    #[test]
    fn beta_chunk_is_first_argument_on_ties() {
        let matcher = NameMatcher::default();
        let merged = matcher
            .merge(&record("Robert Odonnell"), &record("Robert ODonnell"))
            .unwrap();
        assert_eq!(merged.texts(), vec!["Robert", "ODonnell"]);
    }

    #[test]
    fn rejects_unrelated_chunk() {
        let matcher = NameMatcher::default();
        assert_eq!(
            matcher.match_names("Robert Scott O'Donnell", &["Fred Scott O'Donnell"]),
            None
        );
        assert_eq!(matcher.match_names("Robert Scott O'Donnell", &["Robert Doe"]), None);
    }

    #[test]
    fn stops_at_first_failure() {
        let matcher = NameMatcher::default();
        assert_eq!(
            matcher.match_names("Robert Smith", &["Fred Smith", "Robert Smith"]),
            None
        );
    }

    #[test]
    fn no_candidates_returns_normalized_base() {
        let matcher = NameMatcher::default();
        let none: [&str; 0] = [];
        assert_eq!(
            matcher.match_names("ODONNELL, ROBERT", &none).as_deref(),
            Some("ROBERT ODONNELL")
        );
    }

    #[test]
    fn aliases_apply_during_merge() {
        let aliases = AliasTable::new().with("bob", "Robert");
        let matcher = NameMatcher::new(aliases, NameNormalizer::default());
        assert_eq!(
            matcher.match_names("Bob Smith", &["R. Smith"]).as_deref(),
            Some("Robert Smith")
        );
    }

    #[test]
    fn titles_are_ignored() {
        let prefix = StripPattern::from_words(StripRole::Prefix, ["Dr"])
            .unwrap()
            .unwrap();
        let suffix = StripPattern::from_words(StripRole::Suffix, ["MD"])
            .unwrap()
            .unwrap();
        let matcher = NameMatcher::new(
            AliasTable::new(),
            NameNormalizer::new(Some(prefix), Some(suffix)),
        );
        assert_eq!(
            matcher
                .match_names("Dr. Jane Roe", &["JANE ROE M.D."])
                .as_deref(),
            Some("Jane Roe")
        );
    }
}
