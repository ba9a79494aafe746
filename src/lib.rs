//! Pairwise Survey - Expert pairwise-comparison questionnaire
//!
//! This crate collects, for every unordered pair of alternatives, how often a
//! respondent prefers one over the other out of 15 cases, validates the
//! answers under the survey's scoring mode, and hands accepted submissions
//! to downstream consumers as domain events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
