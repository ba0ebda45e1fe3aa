use serde::{Deserialize, Serialize};

use super::PrefsSnapshot;

/// Messages crossing the settings-UI channel.
///
/// The transport itself is an external collaborator; only the message
/// shapes are owned here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SettingsMessage {
    /// Outbound: push the current configuration to an open settings page
    /// so its controls stay in sync with a just-applied change.
    ShowPreferences { prefs: PrefsSnapshot },

    /// Inbound: a single preference edit requested by the settings page.
    ChangePreference { key: String, value: String },
}
