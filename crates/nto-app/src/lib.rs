//! New Tab Override orchestration layer
//!
//! Owns the clipboard polling loop and the controller that wires mode
//! resolution to the override sink.

pub mod commands;
pub mod controller;
pub mod poller;

pub use commands::apply_preference_command;
pub use controller::{OverrideController, ShutdownReason};
pub use poller::ClipboardUrlPoller;
