//! Honorific prefix and suffix stripping
//!
//! Titles such as "Doctor" or "Ph.D." carry no identity information and are
//! removed before a name is split into chunks. A [`StripPattern`] is compiled
//! once, either from a list of words or from a caller-supplied regular
//! expression, and then applied to any number of names.
//!
//! Word lists become a case-insensitive pattern that accepts a `.` after
//! every letter, so the configured suffix "PhD" also strips "Ph.D." and
//! "PH.D.". Any run of listed words is removed, in any order and repeated.

use crate::error::{MatchError, MatchResult, StripRole};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::trace;

/// A compiled prefix or suffix stripper
#[derive(Debug, Clone)]
pub struct StripPattern {
    role: StripRole,
    regex: Regex,
}

impl StripPattern {
    /// Build from a word list.
    ///
    /// Dots inside the words are ignored, so "M.D." and "MD" are the same
    /// entry. Returns `None` when no word has any characters left, since
    /// such a list strips nothing.
    pub fn from_words<I, S>(role: StripRole, words: I) -> MatchResult<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|word| dotted_word(word.as_ref()))
            .filter(|alt| !alt.is_empty())
            .collect();

        if alternatives.is_empty() {
            return Ok(None);
        }

        let words = alternatives.join("|");
        let pattern = match role {
            StripRole::Prefix => format!(r"^\s*(?:(?:{})\s+)*", words),
            StripRole::Suffix => format!(r"(?:\s+(?:{}))*\s*$", words),
        };

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MatchError::InvalidPattern {
                role,
                message: e.to_string(),
            })?;

        trace!(%role, pattern = %pattern, "compiled strip pattern from words");
        Ok(Some(Self { role, regex }))
    }

    /// Compile a caller-supplied regular expression.
    ///
    /// The expression is used as written: anchoring and case sensitivity are
    /// up to the caller.
    pub fn from_pattern(role: StripRole, pattern: &str) -> MatchResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| MatchError::InvalidPattern {
            role,
            message: e.to_string(),
        })?;
        Ok(Self { role, regex })
    }

    /// Wrap an already compiled expression
    pub fn from_regex(role: StripRole, regex: Regex) -> Self {
        Self { role, regex }
    }

    /// Pick the configured pattern for a role.
    ///
    /// An explicit pattern beats a word list. With no pattern and no usable
    /// word, nothing is stripped for this role.
    pub fn resolve(
        role: StripRole,
        pattern: Option<&str>,
        words: &[String],
    ) -> MatchResult<Option<Self>> {
        match pattern {
            Some(pattern) => Self::from_pattern(role, pattern).map(Some),
            None => Self::from_words(role, words),
        }
    }

    pub fn role(&self) -> StripRole {
        self.role
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Remove every match from `name`
    pub fn strip<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(name, "")
    }
}

/// "PhD" -> `P\.?h\.?D\.?`
fn dotted_word(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '.')
        .map(|c| format!(r"{}\.?", regex::escape(c.encode_utf8(&mut [0; 4]))))
        .collect()
}
