use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::prefs::PrefChange;

/// Key-value preference storage with change notification.
///
/// Covers both the extension's own namespace (`type`, `url`) and the host
/// homepage key; a change to any watched key reports through the same
/// channel.
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Subscribe to changes. Each call returns an independent receiver.
    async fn watch(&self) -> Result<mpsc::Receiver<PrefChange>>;
}

/// The host browser's localized homepage setting.
#[async_trait]
pub trait HomepagePort: Send + Sync {
    /// Current homepage value, possibly a `|`-delimited list of startup
    /// tabs. Yields the blank sentinel when the host has none configured.
    async fn localized_homepage(&self) -> Result<String>;
}
