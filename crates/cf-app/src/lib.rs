//! Choiceflow Application Orchestration Layer
//!
//! This crate contains the caller-side use cases a task engine goes through
//! to talk to the host-application capability ports.

pub mod use_cases;

pub use use_cases::{DeliverValues, PresentChoices};
