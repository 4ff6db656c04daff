//! Error types for the DeskHands protocol layer.

mod action;
mod backend;

pub use action::*;
pub use backend::*;
