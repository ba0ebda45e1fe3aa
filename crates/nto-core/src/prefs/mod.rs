//! Preference model: stored keys, the configuration snapshot and the
//! settings-UI channel messages.

pub mod keys;
mod messages;
mod model;

pub use messages::SettingsMessage;
pub use model::{PrefChange, PrefsSnapshot};
