//! Disambiguation domain models
//!
//! A disambiguation turn presents multiple candidate entities to the user so
//! they can select one when a task input is ambiguous. This module defines
//! the value objects exchanged with the host application during such a turn.

pub mod candidate_list;

pub use candidate_list::{CandidateList, CandidateListError};
