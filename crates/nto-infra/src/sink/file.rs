use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use nto_core::newtab::BLANK_TARGET;
use nto_core::ports::OverrideSinkPort;
use nto_core::NewTabTarget;

/// Override sink for the standalone daemon: the effective new-tab target
/// is published as a small JSON state file other tooling can read.
pub struct FileOverrideSink {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct OverrideState {
    target: String,
    overridden: bool,
}

impl FileOverrideSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write_state(&self, state: &OverrideState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create state dir failed: {}", dir.display()))?;
        }

        let content =
            serde_json::to_string_pretty(state).context("serialize override state failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp state failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("rename state file failed: {}", self.path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl OverrideSinkPort for FileOverrideSink {
    async fn apply(&self, target: &NewTabTarget) -> Result<()> {
        info!(target = %target, "applying new tab override");
        self.write_state(&OverrideState {
            target: target.as_str().to_string(),
            overridden: !target.is_blank(),
        })
        .await
    }

    async fn reset(&self) -> Result<()> {
        info!("resetting new tab override to platform default");
        self.write_state(&OverrideState {
            target: BLANK_TARGET.to_string(),
            overridden: false,
        })
        .await
    }
}
