//! RecordScoreHandler - Command handler for one pair's slider change.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ResponseId};
use crate::domain::survey::{
    Feedback, OptionPair, PairStatus, PairwiseSurvey, Progress, Score, ScoreEntry, SurveyError,
    SurveyResponse,
};
use crate::ports::SurveyResponseRepository;

/// Command to record the two scores of a pair.
///
/// Scores arrive as raw integers from the presentation layer and are
/// range-checked here.
#[derive(Debug, Clone)]
pub struct RecordScoreCommand {
    pub response_id: ResponseId,
    /// 0-based position in the survey's pair enumeration.
    pub pair_index: usize,
    pub score_first: i64,
    pub score_second: i64,
}

/// Result of recording a pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordScoreResult {
    pub pair: OptionPair,
    pub entry: ScoreEntry,
    pub status: PairStatus,
    pub feedback: Feedback,
    pub progress: Progress,
}

/// Handler for score edits.
pub struct RecordScoreHandler {
    survey: Arc<PairwiseSurvey>,
    repository: Arc<dyn SurveyResponseRepository>,
}

impl RecordScoreHandler {
    pub fn new(survey: Arc<PairwiseSurvey>, repository: Arc<dyn SurveyResponseRepository>) -> Self {
        Self { survey, repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordScoreCommand,
        _metadata: CommandMetadata,
    ) -> Result<RecordScoreResult, SurveyError> {
        // 1. Validate input before touching storage
        let pair = self.survey.pair_at(cmd.pair_index)?;
        let score_first = Score::for_field("first", cmd.score_first)?;
        let score_second = Score::for_field("second", cmd.score_second)?;

        // 2. Apply to the latest stored response; concurrent edits of other
        //    pairs must survive this one
        let mut outcome = None;
        let mut edit = |response: &mut SurveyResponse| {
            let result = self
                .survey
                .record_score(response, pair, score_first, score_second);
            let keep = result.is_ok();
            outcome = Some(result);
            keep
        };
        let response = self
            .repository
            .modify(&cmd.response_id, &mut edit)
            .await?
            .ok_or(SurveyError::NotFound(cmd.response_id))?;
        let status = outcome
            .ok_or_else(|| SurveyError::infrastructure("Score edit was not applied"))??;

        tracing::debug!(
            response_id = %cmd.response_id,
            pair = %pair,
            score_first = score_first.value(),
            score_second = score_second.value(),
            consistent = status.is_consistent(),
            "Score recorded"
        );

        Ok(RecordScoreResult {
            pair,
            entry: ScoreEntry::new(pair, score_first, score_second),
            status,
            feedback: status.feedback(),
            progress: self.survey.progress(&response),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::survey::test_support::{repository, survey};
    use crate::domain::survey::{FrequencyStatus, ScoringMode, Severity, SplitStatus};

    async fn setup(
        mode: ScoringMode,
    ) -> (
        RecordScoreHandler,
        Arc<crate::adapters::storage::InMemoryResponseRepository>,
        ResponseId,
    ) {
        let repo = repository();
        let response = SurveyResponse::new(ResponseId::new());
        repo.save(&response).await.unwrap();
        (
            RecordScoreHandler::new(survey(mode), repo.clone()),
            repo,
            *response.id(),
        )
    }

    fn cmd(response_id: ResponseId, pair_index: usize, a: i64, b: i64) -> RecordScoreCommand {
        RecordScoreCommand {
            response_id,
            pair_index,
            score_first: a,
            score_second: b,
        }
    }

    #[tokio::test]
    async fn records_entry_and_returns_status() {
        let (handler, repo, id) = setup(ScoringMode::FixedSplit).await;

        let result = handler
            .handle(cmd(id, 0, 9, 6), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(result.pair, OptionPair::new(0, 1).unwrap());
        assert_eq!(result.status, PairStatus::Split(SplitStatus::Balanced));
        assert_eq!(result.progress, Progress { answered: 1, total: 6 });

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.entry(&result.pair), Some(&result.entry));
    }

    #[tokio::test]
    async fn frequency_overlap_comes_back_as_warning() {
        let (handler, _repo, id) = setup(ScoringMode::Frequency).await;

        let result = handler
            .handle(cmd(id, 0, 10, 10), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(
            result.status,
            PairStatus::Frequency(FrequencyStatus::Overlap { sum: 20 })
        );
        assert_eq!(result.feedback.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected_without_storing() {
        let (handler, repo, id) = setup(ScoringMode::FixedSplit).await;

        let err = handler
            .handle(cmd(id, 0, 16, 0), CommandMetadata::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SurveyError::InvalidScoreRange {
                field: "first".to_string(),
                actual: 16
            }
        );
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.answered_count(), 0);
    }

    #[tokio::test]
    async fn negative_second_score_names_its_field() {
        let (handler, _repo, id) = setup(ScoringMode::Frequency).await;

        let err = handler
            .handle(cmd(id, 1, 3, -1), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, SurveyError::InvalidScoreRange { ref field, .. } if field == "second"));
    }

    #[tokio::test]
    async fn pair_index_beyond_enumeration_is_rejected() {
        let (handler, _repo, id) = setup(ScoringMode::Frequency).await;

        let err = handler
            .handle(cmd(id, 6, 7, 8), CommandMetadata::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SurveyError::PairIndexOutOfRange {
                index: 6,
                pair_count: 6
            }
        );
    }

    #[tokio::test]
    async fn unknown_response_is_not_found() {
        let (handler, _repo, _id) = setup(ScoringMode::Frequency).await;
        let missing = ResponseId::new();

        let err = handler
            .handle(cmd(missing, 0, 7, 8), CommandMetadata::new())
            .await
            .unwrap_err();

        assert_eq!(err, SurveyError::NotFound(missing));
    }

    #[tokio::test]
    async fn overwrites_only_the_edited_pair() {
        let (handler, repo, id) = setup(ScoringMode::FixedSplit).await;
        handler.handle(cmd(id, 0, 9, 6), CommandMetadata::new()).await.unwrap();
        handler.handle(cmd(id, 1, 8, 7), CommandMetadata::new()).await.unwrap();
        handler.handle(cmd(id, 0, 3, 12), CommandMetadata::new()).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        let first = stored.entry(&OptionPair::new(0, 1).unwrap()).unwrap();
        let second = stored.entry(&OptionPair::new(0, 2).unwrap()).unwrap();
        assert_eq!(first.score_first.value(), 3);
        assert_eq!(second.score_first.value(), 8);
        assert_eq!(stored.answered_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_edits_of_different_pairs_are_all_kept() {
        let labels: Vec<String> = (1..=12).map(|n| format!("Option {}", n)).collect();
        let survey = Arc::new(
            PairwiseSurvey::new("Concurrent survey", labels, ScoringMode::FixedSplit).unwrap(),
        );
        let repo = repository();
        let handler = Arc::new(RecordScoreHandler::new(survey.clone(), repo.clone()));
        let pair_count = survey.pair_count();

        for _round in 0..10 {
            let response = SurveyResponse::new(ResponseId::new());
            let id = *response.id();
            repo.save(&response).await.unwrap();

            let tasks: Vec<_> = (0..pair_count)
                .map(|index| {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        handler
                            .handle(cmd(id, index, 9, 6), CommandMetadata::new())
                            .await
                            .unwrap();
                    })
                })
                .collect();
            for task in tasks {
                task.await.unwrap();
            }

            let stored = repo.find_by_id(&id).await.unwrap().unwrap();
            assert_eq!(stored.answered_count(), pair_count);
            assert!(survey.inconsistencies(&stored).is_empty());
        }
    }
}
