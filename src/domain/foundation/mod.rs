//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types, command metadata and the
//! event plumbing used by the survey domain.

mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::ResponseId;
pub use timestamp::Timestamp;
