//! Scoring modes - the two elicitation methodologies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{FrequencyStatus, PairStatus, ScoreEntry, SplitStatus, SCORE_BUDGET};
use crate::domain::foundation::ValidationError;

/// How pair scores are elicited and validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// "In how many of 15 cases is X better?" asked for each side.
    /// Sums other than 15 are advisory only.
    #[default]
    Frequency,
    /// 15 points divided between the two options. Every pair must sum
    /// to exactly 15 before the response can be submitted.
    FixedSplit,
}

impl ScoringMode {
    /// Classifies one entry under this mode.
    pub fn assess(&self, entry: &ScoreEntry) -> PairStatus {
        let sum = entry.total();
        match self {
            ScoringMode::Frequency => PairStatus::Frequency(match sum.cmp(&SCORE_BUDGET) {
                std::cmp::Ordering::Equal => FrequencyStatus::Ok,
                std::cmp::Ordering::Greater => FrequencyStatus::Overlap { sum },
                std::cmp::Ordering::Less => FrequencyStatus::Ties {
                    sum,
                    remainder: SCORE_BUDGET - sum,
                },
            }),
            ScoringMode::FixedSplit => PairStatus::Split(if sum == SCORE_BUDGET {
                SplitStatus::Balanced
            } else {
                SplitStatus::Imbalanced {
                    sum,
                    delta: i16::from(sum) - i16::from(SCORE_BUDGET),
                }
            }),
        }
    }

    /// Returns true if inconsistent pairs block submission.
    pub fn blocks_on_inconsistency(&self) -> bool {
        matches!(self, ScoringMode::FixedSplit)
    }

    /// Returns the configuration/wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Frequency => "frequency",
            ScoringMode::FixedSplit => "fixed_split",
        }
    }

    /// Instruction shown above the comparisons.
    pub fn instructions(&self) -> &'static str {
        match self {
            ScoringMode::Frequency => {
                "Пожалуйста, оцените, в скольких случаях из 15 вы считаете один вариант лучше другого."
            }
            ScoringMode::FixedSplit => {
                "Пожалуйста, распределите 15 баллов между двумя вариантами в каждой паре."
            }
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" => Ok(ScoringMode::Frequency),
            "fixed_split" | "fixed-split" => Ok(ScoringMode::FixedSplit),
            other => Err(ValidationError::invalid_format(
                "mode",
                format!("unknown scoring mode '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::{OptionPair, Score};

    fn entry(a: i64, b: i64) -> ScoreEntry {
        ScoreEntry::new(
            OptionPair::new(0, 1).unwrap(),
            Score::new(a).unwrap(),
            Score::new(b).unwrap(),
        )
    }

    #[test]
    fn frequency_classifies_exact_budget_as_ok() {
        assert_eq!(
            ScoringMode::Frequency.assess(&entry(8, 7)),
            PairStatus::Frequency(FrequencyStatus::Ok)
        );
    }

    #[test]
    fn frequency_flags_overlap_above_budget() {
        assert_eq!(
            ScoringMode::Frequency.assess(&entry(10, 10)),
            PairStatus::Frequency(FrequencyStatus::Overlap { sum: 20 })
        );
    }

    #[test]
    fn frequency_reports_tie_remainder_below_budget() {
        assert_eq!(
            ScoringMode::Frequency.assess(&entry(7, 7)),
            PairStatus::Frequency(FrequencyStatus::Ties {
                sum: 14,
                remainder: 1
            })
        );
    }

    #[test]
    fn fixed_split_balanced_only_at_budget() {
        assert_eq!(
            ScoringMode::FixedSplit.assess(&entry(9, 6)),
            PairStatus::Split(SplitStatus::Balanced)
        );
        assert_eq!(
            ScoringMode::FixedSplit.assess(&entry(10, 6)),
            PairStatus::Split(SplitStatus::Imbalanced { sum: 16, delta: 1 })
        );
        assert_eq!(
            ScoringMode::FixedSplit.assess(&entry(0, 0)),
            PairStatus::Split(SplitStatus::Imbalanced { sum: 0, delta: -15 })
        );
    }

    #[test]
    fn only_fixed_split_blocks() {
        assert!(!ScoringMode::Frequency.blocks_on_inconsistency());
        assert!(ScoringMode::FixedSplit.blocks_on_inconsistency());
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("frequency".parse::<ScoringMode>().unwrap(), ScoringMode::Frequency);
        assert_eq!(" Fixed_Split ".parse::<ScoringMode>().unwrap(), ScoringMode::FixedSplit);
        assert_eq!("fixed-split".parse::<ScoringMode>().unwrap(), ScoringMode::FixedSplit);
        assert!("ahp".parse::<ScoringMode>().is_err());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ScoringMode::FixedSplit).unwrap(),
            "\"fixed_split\""
        );
    }
}
