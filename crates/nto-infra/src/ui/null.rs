use anyhow::Result;
use async_trait::async_trait;

use nto_core::ports::SettingsUiPort;
use nto_core::PrefsSnapshot;

/// Settings-UI port for headless deployments: no surface is ever open.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSettingsUi;

#[async_trait]
impl SettingsUiPort for NullSettingsUi {
    async fn is_open(&self) -> bool {
        false
    }

    async fn show_preferences(&self, _snapshot: &PrefsSnapshot) -> Result<()> {
        Ok(())
    }
}
