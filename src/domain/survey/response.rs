//! SurveyResponse aggregate - one respondent's answers.
//!
//! A response starts empty, is edited one pair at a time, and is validated
//! as a whole on submission. Each edit replaces the previous entry for that
//! pair; no history is kept.

use std::collections::BTreeMap;

use super::{OptionPair, ScoreEntry};
use crate::domain::foundation::{ResponseId, Timestamp};

/// One respondent's in-progress answers.
///
/// # Invariants
///
/// - at most one entry per pair
/// - entries are only added through `PairwiseSurvey::record_score`, which
///   checks that the pair belongs to the survey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    id: ResponseId,
    respondent: String,
    entries: BTreeMap<OptionPair, ScoreEntry>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl SurveyResponse {
    /// Creates an empty response.
    pub fn new(id: ResponseId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            respondent: String::new(),
            entries: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ResponseId {
        &self.id
    }

    /// Returns the name exactly as entered.
    pub fn respondent_name(&self) -> &str {
        &self.respondent
    }

    /// Returns the trimmed name, or `None` if it is blank.
    pub fn identity(&self) -> Option<&str> {
        let trimmed = self.respondent.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Returns the entry recorded for a pair, if any.
    pub fn entry(&self, pair: &OptionPair) -> Option<&ScoreEntry> {
        self.entries.get(pair)
    }

    /// Returns all entries in pair enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.values()
    }

    /// Returns how many pairs have an entry.
    pub fn answered_count(&self) -> usize {
        self.entries.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the respondent's name. Blank names are accepted here and
    /// rejected at submission.
    pub fn set_respondent_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name != self.respondent {
            self.respondent = name;
            self.updated_at = Timestamp::now();
        }
    }

    /// Replaces the entry for `entry.pair`. Returns true if anything changed.
    pub(super) fn put_entry(&mut self, entry: ScoreEntry) -> bool {
        if self.entries.get(&entry.pair) == Some(&entry) {
            return false;
        }
        self.entries.insert(entry.pair, entry);
        self.updated_at = Timestamp::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::Score;

    fn entry(first: usize, second: usize, a: i64, b: i64) -> ScoreEntry {
        ScoreEntry::new(
            OptionPair::new(first, second).unwrap(),
            Score::new(a).unwrap(),
            Score::new(b).unwrap(),
        )
    }

    #[test]
    fn new_response_is_empty_and_anonymous() {
        let response = SurveyResponse::new(ResponseId::new());
        assert_eq!(response.answered_count(), 0);
        assert_eq!(response.respondent_name(), "");
        assert!(response.identity().is_none());
    }

    #[test]
    fn identity_trims_whitespace() {
        let mut response = SurveyResponse::new(ResponseId::new());
        response.set_respondent_name("  Иванов И.И.  ");
        assert_eq!(response.identity(), Some("Иванов И.И."));

        response.set_respondent_name("   ");
        assert!(response.identity().is_none());
    }

    #[test]
    fn put_entry_overwrites_previous_entry_for_pair() {
        let mut response = SurveyResponse::new(ResponseId::new());
        assert!(response.put_entry(entry(0, 1, 9, 6)));
        assert!(response.put_entry(entry(0, 1, 4, 11)));

        assert_eq!(response.answered_count(), 1);
        let stored = response.entry(&OptionPair::new(0, 1).unwrap()).unwrap();
        assert_eq!(stored.score_first.value(), 4);
    }

    #[test]
    fn put_entry_with_same_values_reports_no_change() {
        let mut response = SurveyResponse::new(ResponseId::new());
        response.put_entry(entry(1, 2, 8, 7));
        let before = response.clone();

        assert!(!response.put_entry(entry(1, 2, 8, 7)));
        assert_eq!(response, before);
    }

    #[test]
    fn entries_iterate_in_pair_order() {
        let mut response = SurveyResponse::new(ResponseId::new());
        response.put_entry(entry(1, 2, 8, 7));
        response.put_entry(entry(0, 3, 8, 7));
        response.put_entry(entry(0, 1, 8, 7));

        let order: Vec<String> = response.entries().map(|e| e.pair.key()).collect();
        assert_eq!(order, vec!["0_1", "0_3", "1_2"]);
    }
}
