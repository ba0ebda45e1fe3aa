//! Orchestration of mode resolution, poller lifecycle and the override
//! sink.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, info_span, Instrument};

use nto_core::newtab::resolver;
use nto_core::ports::{HomepagePort, OverrideSinkPort, PreferenceStorePort, SettingsUiPort};
use nto_core::prefs::keys;
use nto_core::{NewTabMode, NewTabTarget, PrefChange, PrefsSnapshot};

use crate::poller::ClipboardUrlPoller;

/// Why the controller is being torn down.
///
/// The poller always stops; only disable/uninstall drop the override
/// itself, so a plain restart keeps the user's configured target in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    AppShutdown,
    Disable,
    Uninstall,
}

/// Owns the current mode state and keeps the override sink consistent
/// across configuration changes.
///
/// One instance per wired environment; all collaborators are injected.
pub struct OverrideController {
    prefs: Arc<dyn PreferenceStorePort>,
    homepage: Arc<dyn HomepagePort>,
    sink: Arc<dyn OverrideSinkPort>,
    settings_ui: Arc<dyn SettingsUiPort>,
    poller: ClipboardUrlPoller,
    current: Mutex<Option<PrefsSnapshot>>,
}

impl OverrideController {
    pub fn new(
        prefs: Arc<dyn PreferenceStorePort>,
        homepage: Arc<dyn HomepagePort>,
        sink: Arc<dyn OverrideSinkPort>,
        settings_ui: Arc<dyn SettingsUiPort>,
        poller: ClipboardUrlPoller,
    ) -> Self {
        Self {
            prefs,
            homepage,
            sink,
            settings_ui,
            poller,
            current: Mutex::new(None),
        }
    }

    /// Re-resolve the new-tab target from the current configuration.
    ///
    /// Invoked at startup and on every preference change. Sink and store
    /// failures propagate to the caller; a malformed configuration never
    /// does (it degrades to the default internal page).
    pub async fn on_configuration_change(&self) -> Result<()> {
        let span = info_span!("controller.on_configuration_change");

        async {
            let snapshot = self.load_snapshot().await?;

            // Leaving clipboard mode tears the poller down first, which
            // also clears its dedupe state.
            if snapshot.mode != NewTabMode::Clipboard {
                self.poller.stop().await;
            }

            match snapshot.mode {
                NewTabMode::Clipboard => {
                    // Clear any previous override; the poller supplies the
                    // real targets from here on.
                    self.sink.apply(&NewTabTarget::blank()).await?;
                    self.poller.start(Arc::clone(&self.sink)).await;
                    info!("following clipboard for new tab targets");
                }
                mode => {
                    let target = match mode {
                        NewTabMode::Homepage => {
                            let raw = self.homepage.localized_homepage().await?;
                            resolver::resolve(mode, &snapshot.custom_url, || raw)
                        }
                        _ => resolver::resolve(mode, &snapshot.custom_url, String::new),
                    };
                    info!(
                        mode = mode.as_pref_value(),
                        target = %target,
                        "applying new tab target"
                    );
                    self.sink.apply(&target).await?;
                }
            }

            if self.settings_ui.is_open().await {
                self.settings_ui.show_preferences(&snapshot).await?;
            }

            *self.current.lock().await = Some(snapshot);
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Apply the startup configuration, then re-resolve on every change
    /// notification until the channel closes.
    pub async fn run(&self, mut changes: mpsc::Receiver<PrefChange>) -> Result<()> {
        self.on_configuration_change().await?;
        while let Some(change) = changes.recv().await {
            debug!(key = %change.key, "preference change notification");
            self.on_configuration_change().await?;
        }
        Ok(())
    }

    /// Tear down: stop polling, and on disable/uninstall hand the new-tab
    /// surface back to the platform default.
    pub async fn shutdown(&self, reason: ShutdownReason) -> Result<()> {
        info!(?reason, "shutting down new tab override");
        self.poller.stop().await;
        if matches!(reason, ShutdownReason::Disable | ShutdownReason::Uninstall) {
            self.sink.reset().await?;
        }
        Ok(())
    }

    /// The most recently applied configuration, if any.
    pub async fn current_snapshot(&self) -> Option<PrefsSnapshot> {
        self.current.lock().await.clone()
    }

    async fn load_snapshot(&self) -> Result<PrefsSnapshot> {
        let type_value = self
            .prefs
            .get(keys::TYPE)
            .await
            .context("read type preference")?;
        let url_value = self
            .prefs
            .get(keys::URL)
            .await
            .context("read url preference")?;
        Ok(PrefsSnapshot::from_values(
            type_value.as_deref(),
            url_value.as_deref(),
        ))
    }
}
