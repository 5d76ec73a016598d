//! Use cases driving the capability ports.

pub mod deliver_values;
pub mod present_choices;

pub use deliver_values::DeliverValues;
pub use present_choices::PresentChoices;
