//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `survey` - Pairwise-comparison survey: options, pairs, scoring, submission

pub mod foundation;
pub mod survey;
