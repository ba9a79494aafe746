//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SurveyResponseRepository` - Storage for in-progress responses
//! - `EventPublisher` - Publishing domain events (submission hand-off)
//! - `EventSubscriber` / `EventHandler` - Reacting to published events

mod event_publisher;
mod event_subscriber;
mod response_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use response_repository::{ResponseEdit, SurveyResponseRepository};
