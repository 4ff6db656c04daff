//! Action protocol definitions.
//!
//! Actions are the fixed catalog of UI primitives an agent can invoke on a device.

mod definition;
mod result;
mod traits;

pub use definition::*;
pub use result::*;
pub use traits::*;
