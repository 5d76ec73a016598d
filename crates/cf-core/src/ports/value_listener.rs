//! Value listener port
//!
//! This port defines the contract for handing resolved values back to the
//! host once a disambiguation turn settles. The engine reconciles the user's
//! selection on its side; the listener only receives the outcome.

use async_trait::async_trait;

/// Receiver capability for resolved values.
///
/// `T` is the entity value type; list-valued slots use `Vec<T>`.
#[async_trait]
pub trait ValueListenerPort<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Deliver a resolved value.
    ///
    /// The returned future completes once the host has accepted the value.
    async fn on_value(&self, value: T) -> anyhow::Result<()>;
}
