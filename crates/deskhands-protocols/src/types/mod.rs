//! Plain data types shared by devices and backends.

mod bitmap;
mod common;
mod geometry;
mod keycode;
mod locate;

pub use bitmap::*;
pub use common::*;
pub use geometry::*;
pub use keycode::*;
pub use locate::*;
