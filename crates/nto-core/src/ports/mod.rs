//! Port interfaces for the application layer
//!
//! Ports define the contract between the orchestration logic and the
//! infrastructure implementations, keeping the core independent of the
//! host browser, the OS clipboard and the preference backend.

mod clipboard;
mod override_sink;
mod prefs;
mod ui;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use override_sink::OverrideSinkPort;
pub use prefs::{HomepagePort, PreferenceStorePort};
pub use ui::SettingsUiPort;
