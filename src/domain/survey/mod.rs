//! Survey domain module.
//!
//! Pairwise-comparison survey: a fixed ordered set of options, every
//! unordered pair of them, and a score entry per pair. Two scoring modes
//! decide how a pair's scores are judged:
//!
//! - `Frequency` - "in how many of 15 cases is X better", advisory checks
//! - `FixedSplit` - 15 points divided per pair, enforced on submission
//!
//! # Events
//!
//! - `ResponseStarted` - Published when a respondent starts
//! - `SurveySubmitted` - Published when a response is accepted

mod entry;
mod errors;
mod events;
mod mode;
mod option;
mod pair;
mod response;
mod score;
mod status;
mod submission;
mod survey;

pub use entry::ScoreEntry;
pub use errors::SurveyError;
pub use events::{ResponseStarted, SurveySubmitted};
pub use mode::ScoringMode;
pub use option::{init_options, SurveyOption};
pub use pair::{generate_pairs, pair_count, OptionPair};
pub use response::SurveyResponse;
pub use score::{Score, SCORE_BUDGET};
pub use status::{Feedback, FrequencyStatus, PairStatus, Severity, SplitStatus};
pub use submission::{InconsistentPair, SubmissionAck};
pub use survey::{PairReview, PairwiseSurvey, Progress, MIN_OPTIONS};
