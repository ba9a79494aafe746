//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-memory event bus and the submission logger
//! - `http` - JSON API over axum
//! - `storage` - In-memory response repository

pub mod events;
pub mod http;
pub mod storage;

pub use events::{InMemoryEventBus, SubmissionLogger};
pub use storage::InMemoryResponseRepository;
