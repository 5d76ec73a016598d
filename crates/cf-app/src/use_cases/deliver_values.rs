use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use cf_core::ids::TurnId;
use cf_core::ports::ValueListenerPort;

/// Use case for delivering resolved values to the host once a
/// disambiguation turn settles.
///
/// The engine reconciles the user's selection before calling this; the
/// listener only sees the settled outcome.
pub struct DeliverValues<T>
where
    T: Send + 'static,
{
    listener: Arc<dyn ValueListenerPort<T>>,
}

impl<T> DeliverValues<T>
where
    T: Send + 'static,
{
    /// Create a new DeliverValues use case from trait objects.
    pub fn new(listener: Arc<dyn ValueListenerPort<T>>) -> Self {
        Self { listener }
    }

    /// Hand the settled value to the listener capability.
    #[tracing::instrument(
        name = "usecase.deliver_values.execute",
        skip(self, value),
        fields(turn_id = %turn_id)
    )]
    pub async fn execute(&self, turn_id: &TurnId, value: T) -> Result<()> {
        info!(turn_id = %turn_id, "Delivering resolved values");

        self.listener
            .on_value(value)
            .await
            .with_context(|| format!("Failed to deliver resolved values for turn {}", turn_id))
    }
}
