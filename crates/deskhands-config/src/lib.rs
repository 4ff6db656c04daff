//! # DeskHands Config
//!
//! Configuration management for DeskHands devices: launch targeting,
//! device behaviour, action tunables and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
