use anyhow::Result;
use async_trait::async_trait;

use crate::prefs::PrefsSnapshot;

/// Outbound half of the settings-UI channel.
///
/// Inbound `change-preference` messages are routed by the transport owner,
/// not through this port.
#[async_trait]
pub trait SettingsUiPort: Send + Sync {
    /// Is a settings surface currently open?
    async fn is_open(&self) -> bool;

    /// Push the full configuration snapshot to the open settings surface.
    async fn show_preferences(&self, snapshot: &PrefsSnapshot) -> Result<()>;
}
