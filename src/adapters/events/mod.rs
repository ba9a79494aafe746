//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `SubmissionLogger` - Handler logging accepted submissions

mod in_memory;
mod submission_log;

pub use in_memory::InMemoryEventBus;
pub use submission_log::SubmissionLogger;
