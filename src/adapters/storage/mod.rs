//! Storage adapters for in-progress survey responses.

mod in_memory_response_repository;

pub use in_memory_response_repository::{InMemoryResponseRepository, DEFAULT_MAX_RESPONSES};
