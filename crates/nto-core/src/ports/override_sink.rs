use anyhow::Result;
use async_trait::async_trait;

use crate::newtab::NewTabTarget;

/// The external service that makes a target the effective new-tab
/// destination.
///
/// Applying the same target twice has no adverse effect; the blank
/// sentinel means "reset to the platform default page".
#[async_trait]
pub trait OverrideSinkPort: Send + Sync {
    async fn apply(&self, target: &NewTabTarget) -> Result<()>;

    /// Drop the override entirely, restoring the platform default. Invoked
    /// on disable/uninstall.
    async fn reset(&self) -> Result<()>;
}
