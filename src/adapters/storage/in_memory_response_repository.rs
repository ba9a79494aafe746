//! In-memory survey response storage.
//!
//! Responses live for the lifetime of the process, up to a fixed limit.
//! Saving a new response at the limit evicts the one touched least
//! recently. Each respondent's response is a separate map entry, so
//! concurrent respondents never share state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ResponseId};
use crate::domain::survey::SurveyResponse;
use crate::ports::{ResponseEdit, SurveyResponseRepository};

/// Responses kept when no limit is configured.
pub const DEFAULT_MAX_RESPONSES: usize = 10_000;

#[derive(Debug, Default)]
struct Store {
    /// Response plus the tick of its last save or edit.
    responses: HashMap<ResponseId, (u64, SurveyResponse)>,
    tick: u64,
}

impl Store {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn least_recently_touched(&self) -> Option<ResponseId> {
        self.responses
            .iter()
            .min_by_key(|(_, (touched, _))| *touched)
            .map(|(id, _)| *id)
    }
}

/// In-memory repository for survey responses.
#[derive(Debug, Clone)]
pub struct InMemoryResponseRepository {
    store: Arc<RwLock<Store>>,
    max_responses: usize,
}

impl InMemoryResponseRepository {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_RESPONSES)
    }

    /// Repository holding at most `max_responses` responses (minimum 1).
    pub fn with_limit(max_responses: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            max_responses: max_responses.max(1),
        }
    }

    #[cfg(test)]
    pub async fn stored_count(&self) -> usize {
        self.store.read().await.responses.len()
    }
}

impl Default for InMemoryResponseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurveyResponseRepository for InMemoryResponseRepository {
    async fn save(&self, response: &SurveyResponse) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        if !store.responses.contains_key(response.id())
            && store.responses.len() >= self.max_responses
        {
            if let Some(evicted) = store.least_recently_touched() {
                store.responses.remove(&evicted);
                tracing::warn!(
                    response_id = %evicted,
                    limit = self.max_responses,
                    "Response limit reached, evicted least recently touched response"
                );
            }
        }

        let tick = store.next_tick();
        store
            .responses
            .insert(*response.id(), (tick, response.clone()));
        Ok(())
    }

    async fn modify(
        &self,
        id: &ResponseId,
        edit: &mut ResponseEdit<'_>,
    ) -> Result<Option<SurveyResponse>, DomainError> {
        let mut store = self.store.write().await;
        let tick = store.next_tick();

        let Some((touched, stored)) = store.responses.get_mut(id) else {
            return Ok(None);
        };

        // Edit a copy so a rejected edit leaves nothing behind.
        let mut draft = stored.clone();
        if edit(&mut draft) {
            *stored = draft;
            *touched = tick;
        }
        Ok(Some(stored.clone()))
    }

    async fn find_by_id(&self, id: &ResponseId) -> Result<Option<SurveyResponse>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .responses
            .get(id)
            .map(|(_, response)| response.clone()))
    }
}
