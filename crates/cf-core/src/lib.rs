//! # cf-core
//!
//! Core domain models and capability ports for choiceflow.
//!
//! This crate contains the pure contract types without any infrastructure
//! dependencies: a task engine depends on the ports, a host application
//! implements them.

// Public module exports
pub mod disambiguation;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use disambiguation::{CandidateList, CandidateListError};
pub use ids::{EntityId, TurnId};
pub use ports::{ChoiceRendererPort, ListResolverPort, RenderError, ValueListenerPort};
