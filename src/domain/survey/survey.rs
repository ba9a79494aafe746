//! PairwiseSurvey - the option set, its pairs, and the validation rules.
//!
//! All operations are pure over the response passed in: recording a score
//! touches only that pair's entry, and submission reads the response
//! without changing it, so resubmitting unchanged data gives the same result.

use serde::Serialize;

use super::{
    generate_pairs, init_options, InconsistentPair, OptionPair, PairStatus, Score, ScoreEntry,
    ScoringMode, SubmissionAck, SurveyError, SurveyOption, SurveyResponse, SCORE_BUDGET,
};
use crate::domain::foundation::{ResponseId, ValidationError};

/// Smallest option set that still yields a pair.
pub const MIN_OPTIONS: usize = 2;

/// A configured pairwise-comparison survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseSurvey {
    title: String,
    options: Vec<SurveyOption>,
    pairs: Vec<OptionPair>,
    mode: ScoringMode,
}

/// One pair's recorded entry and status, for review screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReview {
    pub pair: OptionPair,
    pub entry: Option<ScoreEntry>,
    pub status: Option<PairStatus>,
}

/// How far a respondent has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// Answered share in `[0, 1]`; an empty survey counts as complete.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.answered as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}

impl PairwiseSurvey {
    /// Builds a survey from ordered option labels.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if fewer than two labels are given
    /// - `EmptyField` if any label is blank
    pub fn new<I, S>(title: impl Into<String>, labels: I, mode: ScoringMode) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = init_options(labels);
        if options.len() < MIN_OPTIONS {
            return Err(ValidationError::invalid_format(
                "options",
                format!(
                    "at least {} options are required, got {}",
                    MIN_OPTIONS,
                    options.len()
                ),
            ));
        }
        if let Some(blank) = options.iter().find(|o| o.label().trim().is_empty()) {
            return Err(ValidationError::empty_field(format!(
                "options[{}]",
                blank.index()
            )));
        }

        let pairs = generate_pairs(&options);
        Ok(Self {
            title: title.into(),
            options,
            pairs,
            mode,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[SurveyOption] {
        &self.options
    }

    /// Pairs in row-major order.
    pub fn pairs(&self) -> &[OptionPair] {
        &self.pairs
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Resolves a 0-based position in the pair enumeration.
    pub fn pair_at(&self, index: usize) -> Result<OptionPair, SurveyError> {
        self.pairs
            .get(index)
            .copied()
            .ok_or(SurveyError::PairIndexOutOfRange {
                index,
                pair_count: self.pairs.len(),
            })
    }

    /// Checks that a pair refers to options of this survey.
    pub fn ensure_pair(&self, pair: &OptionPair) -> Result<(), SurveyError> {
        if pair.second() < self.options.len() {
            Ok(())
        } else {
            Err(SurveyError::UnknownPair(*pair))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts an empty response for a new respondent.
    pub fn start_response(&self) -> SurveyResponse {
        SurveyResponse::new(ResponseId::new())
    }

    /// Records both scores for a pair, replacing any earlier entry.
    ///
    /// Returns the pair's status under this survey's mode so the caller can
    /// render feedback immediately.
    ///
    /// # Errors
    ///
    /// - `UnknownPair` if the pair is not part of this survey
    pub fn record_score(
        &self,
        response: &mut SurveyResponse,
        pair: OptionPair,
        score_first: Score,
        score_second: Score,
    ) -> Result<PairStatus, SurveyError> {
        self.ensure_pair(&pair)?;
        let entry = ScoreEntry::new(pair, score_first, score_second);
        response.put_entry(entry);
        Ok(self.mode.assess(&entry))
    }

    /// Current status of one pair, or `None` if it has no entry yet.
    pub fn status_of(&self, response: &SurveyResponse, pair: &OptionPair) -> Option<PairStatus> {
        response.entry(pair).map(|entry| self.mode.assess(entry))
    }

    /// Entry and status for every pair, in enumeration order.
    pub fn review(&self, response: &SurveyResponse) -> Vec<PairReview> {
        self.pairs
            .iter()
            .map(|pair| {
                let entry = response.entry(pair).copied();
                PairReview {
                    pair: *pair,
                    status: entry.as_ref().map(|e| self.mode.assess(e)),
                    entry,
                }
            })
            .collect()
    }

    pub fn progress(&self, response: &SurveyResponse) -> Progress {
        Progress {
            answered: self
                .pairs
                .iter()
                .filter(|pair| response.entry(pair).is_some())
                .count(),
            total: self.pairs.len(),
        }
    }

    /// Pairs that are missing or do not sum to exactly the budget.
    pub fn inconsistencies(&self, response: &SurveyResponse) -> Vec<InconsistentPair> {
        self.pairs
            .iter()
            .filter_map(|pair| match response.entry(pair) {
                None => Some(InconsistentPair {
                    pair: *pair,
                    sum: None,
                }),
                Some(entry) if entry.total() != SCORE_BUDGET => Some(InconsistentPair {
                    pair: *pair,
                    sum: Some(entry.total()),
                }),
                Some(_) => None,
            })
            .collect()
    }

    /// Validates the whole response and produces the acknowledgement.
    ///
    /// Checks, in order: a non-blank respondent name, then (fixed-split
    /// only) that every pair sums to exactly 15.
    ///
    /// # Errors
    ///
    /// - `MissingIdentity` if the trimmed name is empty
    /// - `InconsistentScores` listing every offending pair
    pub fn submit(&self, response: &SurveyResponse) -> Result<SubmissionAck, SurveyError> {
        let respondent = response
            .identity()
            .ok_or(SurveyError::MissingIdentity)?
            .to_string();

        if self.mode.blocks_on_inconsistency() {
            let offending = self.inconsistencies(response);
            if !offending.is_empty() {
                return Err(SurveyError::InconsistentScores(offending));
            }
        }

        let mut entries = Vec::with_capacity(self.pairs.len());
        let mut unanswered = Vec::new();
        for pair in &self.pairs {
            match response.entry(pair) {
                Some(entry) => entries.push(*entry),
                None => unanswered.push(*pair),
            }
        }

        Ok(SubmissionAck {
            respondent,
            mode: self.mode,
            entries,
            unanswered,
        })
    }
}
