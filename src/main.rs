//! Standalone New Tab Override daemon.
//!
//! Watches the preference store, resolves the configured new-tab mode and
//! publishes the effective target through the file-backed sink until
//! interrupted.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nto_app::{ClipboardUrlPoller, OverrideController, ShutdownReason};
use nto_core::ports::PreferenceStorePort;
use nto_infra::prefs::default_prefs_path;
use nto_infra::{FileOverrideSink, FilePrefsRepository, NullSettingsUi, SystemClipboard};

#[derive(Debug, Parser)]
#[command(
    name = "newtab-override",
    version,
    about = "Redirect the new tab surface to a configured target"
)]
struct Cli {
    /// Preference store location (JSON)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// File the effective new-tab target is published to
    #[arg(long)]
    state: Option<PathBuf>,

    /// Clipboard poll interval in milliseconds
    #[arg(long, default_value_t = 500)]
    poll_interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let prefs_path = match cli.prefs {
        Some(path) => path,
        None => default_prefs_path().context("no config directory available")?,
    };
    let state_path = match cli.state {
        Some(path) => path,
        None => prefs_path.with_file_name("newtab-target.json"),
    };

    let prefs = Arc::new(FilePrefsRepository::open(&prefs_path).await?);
    let clipboard = Arc::new(SystemClipboard::new()?);
    let sink = Arc::new(FileOverrideSink::new(&state_path));
    let poller = ClipboardUrlPoller::new(clipboard, Duration::from_millis(cli.poll_interval_ms));

    let controller = OverrideController::new(
        prefs.clone(),
        prefs.clone(),
        sink,
        Arc::new(NullSettingsUi),
        poller,
    );

    let changes = prefs.watch().await?;
    info!(
        prefs = %prefs_path.display(),
        state = %state_path.display(),
        "new tab override running"
    );

    tokio::select! {
        result = controller.run(changes) => result?,
        _ = tokio::signal::ctrl_c() => {
            controller.shutdown(ShutdownReason::AppShutdown).await?;
        }
    }

    Ok(())
}
