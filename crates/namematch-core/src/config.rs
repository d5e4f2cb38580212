//! Serializable matcher configuration
//!
//! [`MatchConfig`] is the plain-data form that callers load from JSON or build
//! in code. [`MatchConfig::compile`] validates it and produces a
//! [`NameMatcher`]; invalid patterns are reported there, before any name is
//! looked at.

use crate::chunk::AliasTable;
use crate::error::{MatchResult, StripRole};
use crate::matcher::NameMatcher;
use crate::normalize::NameNormalizer;
use crate::strip::StripPattern;
use serde::{Deserialize, Serialize};

/// Aliases plus prefix/suffix stripping rules.
///
/// For each role a pattern string takes precedence over the word list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub aliases: AliasTable,
    pub strip_prefix_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_pattern: Option<String>,
    pub strip_suffix_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_pattern: Option<String>,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: &str, expansion: impl Into<String>) -> Self {
        self.aliases.insert(alias, expansion);
        self
    }

    pub fn with_prefix_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_prefix_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_suffix_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_suffix_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_prefix_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.prefix_pattern = Some(pattern.into());
        self
    }

    pub fn with_suffix_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.suffix_pattern = Some(pattern.into());
        self
    }

    /// Layer `other` on top of `self`.
    ///
    /// Aliases and word lists accumulate; patterns in `other` replace ours.
    pub fn merge(&mut self, other: MatchConfig) {
        self.aliases.extend(&other.aliases);
        self.strip_prefix_words.extend(other.strip_prefix_words);
        self.strip_suffix_words.extend(other.strip_suffix_words);
        if other.prefix_pattern.is_some() {
            self.prefix_pattern = other.prefix_pattern;
        }
        if other.suffix_pattern.is_some() {
            self.suffix_pattern = other.suffix_pattern;
        }
    }

    pub fn compile_normalizer(&self) -> MatchResult<NameNormalizer> {
        let prefix = StripPattern::resolve(
            StripRole::Prefix,
            self.prefix_pattern.as_deref(),
            &self.strip_prefix_words,
        )?;
        let suffix = StripPattern::resolve(
            StripRole::Suffix,
            self.suffix_pattern.as_deref(),
            &self.strip_suffix_words,
        )?;
        Ok(NameNormalizer::new(prefix, suffix))
    }

    pub fn compile(&self) -> MatchResult<NameMatcher> {
        Ok(NameMatcher::new(
            self.aliases.clone(),
            self.compile_normalizer()?,
        ))
    }
}
