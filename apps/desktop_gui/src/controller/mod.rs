//! Controller layer: backend events and command orchestration around the quote form.

pub mod events;
pub mod orchestration;
