use serde::{Deserialize, Serialize};

use crate::newtab::NewTabMode;

/// Configuration snapshot read from the preference store.
///
/// Rebuilt on every change notification; nothing is cached beyond the
/// current resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefsSnapshot {
    /// Selected mode, serialized as the stored `type` value.
    #[serde(rename = "type")]
    pub mode: NewTabMode,

    /// Stored custom target; meaningful only in custom-URL mode.
    #[serde(default)]
    pub custom_url: String,
}

impl PrefsSnapshot {
    /// Build a snapshot from raw stored values.
    ///
    /// Missing or unrecognized values degrade to the defaults; a snapshot
    /// can always be built.
    pub fn from_values(type_value: Option<&str>, url_value: Option<&str>) -> Self {
        Self {
            mode: type_value.map(NewTabMode::from_pref_value).unwrap_or_default(),
            custom_url: url_value.unwrap_or_default().to_string(),
        }
    }
}

impl Default for PrefsSnapshot {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Change notification from the preference store watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefChange {
    /// The key that changed.
    pub key: String,
}

impl PrefChange {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
