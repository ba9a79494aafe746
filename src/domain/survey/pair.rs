//! Option pairs and their canonical enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SurveyOption;
use crate::domain::foundation::ValidationError;

/// An unordered pair of options, stored with `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct OptionPair {
    first: usize,
    second: usize,
}

#[derive(Deserialize)]
struct RawPair {
    first: usize,
    second: usize,
}

impl TryFrom<RawPair> for OptionPair {
    type Error = ValidationError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        OptionPair::new(raw.first, raw.second)
    }
}

impl OptionPair {
    /// Creates a pair from two option indices.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` unless `first < second`
    pub fn new(first: usize, second: usize) -> Result<Self, ValidationError> {
        if first >= second {
            return Err(ValidationError::invalid_format(
                "pair",
                format!("expected first < second, got ({}, {})", first, second),
            ));
        }
        Ok(Self { first, second })
    }

    /// Index of the option receiving `score_first`.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Index of the option receiving `score_second`.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Key in the `"{i}_{j}"` form used by form widgets.
    pub fn key(&self) -> String {
        format!("{}_{}", self.first, self.second)
    }

    /// Human-readable label with 1-based numbers, e.g. "Варианты 1 и 2".
    pub fn label(&self) -> String {
        format!("Варианты {} и {}", self.first + 1, self.second + 1)
    }
}

impl fmt::Display for OptionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Number of unordered pairs over `n` options: n(n-1)/2.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Enumerates every unordered pair in row-major order.
///
/// Outer index ascending, inner index ascending. Pair keys and display
/// order depend on this ordering.
pub fn generate_pairs(options: &[SurveyOption]) -> Vec<OptionPair> {
    let n = options.len();
    let mut pairs = Vec::with_capacity(pair_count(n));
    for first in 0..n {
        for second in (first + 1)..n {
            pairs.push(OptionPair { first, second });
        }
    }
    pairs
}
