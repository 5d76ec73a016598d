use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::info;

use cf_core::disambiguation::CandidateList;
use cf_core::ids::TurnId;
use cf_core::ports::ChoiceRendererPort;

/// Use case for presenting disambiguation choices for one turn.
/// 单轮消歧选项渲染用例。
///
/// Renders go through a turn gate so one resolver instance never has two
/// renders in flight: the host UI tracks a single active disambiguation
/// context at a time.
pub struct PresentChoices {
    renderer: Arc<dyn ChoiceRendererPort>,
    turn_gate: Mutex<()>,
}

impl PresentChoices {
    /// Create a new PresentChoices use case from trait objects.
    pub fn new(renderer: Arc<dyn ChoiceRendererPort>) -> Self {
        Self {
            renderer,
            turn_gate: Mutex::new(()),
        }
    }

    /// Hand the candidates to the host UI and wait for it to commit.
    #[tracing::instrument(
        name = "usecase.present_choices.execute",
        skip(self, candidates),
        fields(turn_id = %turn_id, candidates = candidates.len())
    )]
    pub async fn execute(&self, turn_id: &TurnId, candidates: &CandidateList) -> Result<()> {
        let _turn = self.turn_gate.lock().await;

        info!(turn_id = %turn_id, "Presenting disambiguation choices");

        self.renderer
            .render_choices(candidates)
            .await
            .with_context(|| format!("Failed to render choices for turn {}", turn_id))
    }
}
