//! Choice renderer port
//!
//! This port defines the callback interface the task engine uses to have the
//! host application render disambiguation choices. It follows the Dependency
//! Inversion Principle:
//! - Engine layer (high-level) depends on this abstraction
//! - Host application (low-level) implements this interface

use crate::disambiguation::CandidateList;
use crate::ports::errors::RenderError;

/// Host-application capability for presenting disambiguation choices.
///
/// The engine calls this whenever the user must pick among multiple matching
/// entities. The returned future is the completion signal: it resolves with
/// no payload once the host has committed to presenting the candidates.
#[async_trait::async_trait]
pub trait ChoiceRendererPort: Send + Sync {
    /// Render the provided candidates in the host UI for disambiguation.
    ///
    /// The host must not reorder, omit, or rewrite the candidates during
    /// rendering. Otherwise the engine's task state will be out of sync
    /// with what the user sees.
    ///
    /// Rendering failures are reported through the returned future as
    /// [`RenderError`], never as a panic. The empty list is valid and must
    /// resolve `Ok(())`.
    async fn render_choices(&self, candidates: &CandidateList) -> Result<(), RenderError>;
}
