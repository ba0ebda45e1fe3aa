//! Inbound settings-UI commands.

use anyhow::{bail, Result};
use tracing::info;

use nto_core::ports::PreferenceStorePort;
use nto_core::SettingsMessage;

/// Translate an inbound `change-preference` message into a discrete store
/// write.
///
/// The store's own change notification then drives re-resolution; nothing
/// is applied directly from here. Outbound message kinds are rejected.
pub async fn apply_preference_command(
    store: &dyn PreferenceStorePort,
    message: &SettingsMessage,
) -> Result<()> {
    match message {
        SettingsMessage::ChangePreference { key, value } => {
            info!(key = %key, "settings page changed a preference");
            store.set(key, value).await
        }
        SettingsMessage::ShowPreferences { .. } => {
            bail!("show-preferences is outbound-only")
        }
    }
}
