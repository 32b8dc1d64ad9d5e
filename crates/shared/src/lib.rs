//! Types shared by the quote client, the form view-model and the front ends.

pub mod domain;
pub mod error;
pub mod protocol;
