//! Backend service protocol.
//!
//! A backend owns the real input devices and displays. Devices only ever
//! talk to it through these traits, so a recording mock can stand in for
//! the native implementation.

mod descriptors;
mod traits;

pub use descriptors::*;
pub use traits::*;
