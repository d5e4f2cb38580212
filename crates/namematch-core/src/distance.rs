//! Weighted edit distance between two strings.
//!
//! Damerau-Levenshtein in its restricted form (optimal string alignment):
//! a transposition only swaps two adjacent characters and the swapped pair is
//! never edited again. Every operation carries its own cost, so the result is
//! asymmetric whenever `insert` and `delete` differ: `insert` pays for
//! characters that appear in `b` but not in `a`, `delete` for the reverse.
//!
//! The name matching pipeline does not use this score. It is exposed for
//! callers that want a graded similarity on top of the yes/no answer from
//! [`crate::matcher`].
//!
//! # Example
//!
//! ```rust
//! use namematch_core::distance::{distance, EditCosts};
//!
//! let costs = EditCosts::default().with_delete(1.5);
//! assert_eq!(distance("testing", "test", &costs).unwrap(), 4.5);
//! ```

use crate::error::{MatchError, MatchResult};
use serde::{Deserialize, Serialize};

/// Per-operation edit costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditCosts {
    pub insert: f64,
    pub delete: f64,
    pub substitute: f64,
    pub transpose: f64,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insert: 1.0,
            delete: 1.0,
            substitute: 1.0,
            transpose: 1.0,
        }
    }
}

impl EditCosts {
    pub fn with_insert(mut self, cost: f64) -> Self {
        self.insert = cost;
        self
    }

    pub fn with_delete(mut self, cost: f64) -> Self {
        self.delete = cost;
        self
    }

    pub fn with_substitute(mut self, cost: f64) -> Self {
        self.substitute = cost;
        self
    }

    pub fn with_transpose(mut self, cost: f64) -> Self {
        self.transpose = cost;
        self
    }

    /// Reject negative and NaN costs
    pub fn validate(&self) -> MatchResult<()> {
        let costs = [
            ("insert", self.insert),
            ("delete", self.delete),
            ("substitute", self.substitute),
            ("transpose", self.transpose),
        ];
        for (operation, cost) in costs {
            if cost.is_nan() || cost < 0.0 {
                return Err(MatchError::NegativeCost { operation, cost });
            }
        }
        Ok(())
    }
}

/// Edit distance from `a` to `b` under `costs`.
///
/// Works on Unicode scalar values. Fails only when a cost is invalid.
pub fn distance(a: &str, b: &str, costs: &EditCosts) -> MatchResult<f64> {
    costs.validate()?;

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Only the previous two rows are ever consulted
    let mut prev_prev: Vec<f64> = Vec::new();
    let mut prev: Vec<f64> = (0..=a.len())
        .map(|col| col as f64 * costs.delete)
        .collect();

    for row in 1..=b.len() {
        let b_ch = b[row - 1];
        let mut next = Vec::with_capacity(a.len() + 1);
        next.push(row as f64 * costs.insert);

        for col in 1..=a.len() {
            let a_ch = a[col - 1];

            let mut cost = prev[col - 1];
            if a_ch != b_ch {
                cost += costs.substitute;
            }
            if row > 1 && col > 1 && a_ch == b[row - 2] && a[col - 2] == b_ch {
                cost = cost.min(prev_prev[col - 2] + costs.transpose);
            }

            let cost = cost
                .min(next[col - 1] + costs.delete)
                .min(prev[col] + costs.insert);
            next.push(cost);
        }

        prev_prev = std::mem::replace(&mut prev, next);
    }

    Ok(prev[a.len()])
}
