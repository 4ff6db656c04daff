//! # DeskHands Protocols
//!
//! Shared contracts for the DeskHands device-control layer.
//! Contains only interface definitions and plain data types - no implementations.
//!
//! ## Core Traits
//!
//! - [`Action`] - A primitive UI action the agent can invoke by name
//! - [`PcService`] - The low-level input/capture backend a device drives
//! - [`Mouse`], [`Keyboard`], [`Clipboard`] - Input sub-services of a backend
//! - [`CaptureSource`] - Produces a bitmap of a monitor or window

pub mod action;
pub mod backend;
pub mod error;
pub mod types;

pub use action::{Action, ActionDefinition, ActionResult};
pub use backend::{
    CaptureSource, Clipboard, Keyboard, ManualSelection, MonitorDescriptor, Mouse, MouseButton,
    PcService, ScrollDirection, WindowDescriptor,
};
pub use error::{ActionError, BackendError};
pub use types::*;
