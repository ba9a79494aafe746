//! Survey response repository port.
//!
//! Holds in-progress responses between edits. A respondent's browser may
//! send several edits to the same response at once, so edits go through
//! `modify`, which applies them one at a time against the latest stored
//! state.

use crate::domain::foundation::{DomainError, ResponseId};
use crate::domain::survey::SurveyResponse;
use async_trait::async_trait;

/// Edit applied to a stored response. Returning `false` discards it.
pub type ResponseEdit<'a> = dyn FnMut(&mut SurveyResponse) -> bool + Send + 'a;

/// Repository port for `SurveyResponse` aggregates.
#[async_trait]
pub trait SurveyResponseRepository: Send + Sync {
    /// Save a new response.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, response: &SurveyResponse) -> Result<(), DomainError>;

    /// Applies `edit` to the stored response and keeps the result if the
    /// edit returns `true`.
    ///
    /// Load, edit and write are atomic with respect to other calls for the
    /// same response, so concurrent edits never overwrite each other.
    /// Returns the response as stored afterwards, or `None` if it doesn't
    /// exist (in which case `edit` is not called).
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn modify(
        &self,
        id: &ResponseId,
        edit: &mut ResponseEdit<'_>,
    ) -> Result<Option<SurveyResponse>, DomainError>;

    /// Find a response by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ResponseId) -> Result<Option<SurveyResponse>, DomainError>;
}
