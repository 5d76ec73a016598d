//! Combined resolver capability for list-valued slots.

use crate::ports::choice_renderer::ChoiceRendererPort;
use crate::ports::value_listener::ValueListenerPort;

/// Capability for resolving a list-valued slot by disambiguation.
///
/// A list resolver both renders candidate choices and receives the resolved
/// list of values. The two halves are independent capabilities; this trait
/// exists so call sites that need both can hold a single trait object.
/// Rendering stays identifier-based no matter what `T` is.
pub trait ListResolverPort<T>: ChoiceRendererPort + ValueListenerPort<Vec<T>>
where
    T: Send + 'static,
{
}

impl<T, R> ListResolverPort<T> for R
where
    T: Send + 'static,
    R: ChoiceRendererPort + ValueListenerPort<Vec<T>> + ?Sized,
{
}
