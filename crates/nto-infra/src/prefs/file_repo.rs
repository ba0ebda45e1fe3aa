use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use nto_core::ports::{HomepagePort, PreferenceStorePort};
use nto_core::prefs::keys;
use nto_core::newtab::BLANK_TARGET;
use nto_core::PrefChange;

const WATCH_CHANNEL_CAPACITY: usize = 16;

/// JSON-file preference store.
///
/// The whole store is a flat string map held in memory and rewritten
/// atomically on every `set`. Watchers registered through
/// [`PreferenceStorePort::watch`] are notified after each successful
/// write.
pub struct FilePrefsRepository {
    path: PathBuf,
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    values: BTreeMap<String, String>,
    watchers: Vec<mpsc::Sender<PrefChange>>,
}

impl FilePrefsRepository {
    /// Open the store at `path`, loading existing values. A missing file
    /// is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("parse preferences failed: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read preferences failed: {}", path.display()))
            }
        };

        Ok(Self {
            path,
            inner: Mutex::new(StoreInner {
                values,
                watchers: Vec::new(),
            }),
        })
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a temp file next to the target, then rename over it, so
    /// the store is never observed half-written.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn notify(inner: &mut StoreInner, key: &str) {
        inner.watchers.retain(|watcher| !watcher.is_closed());
        for watcher in &inner.watchers {
            if watcher.try_send(PrefChange::new(key)).is_err() {
                debug!(key, "preference watcher channel full, notification dropped");
            }
        }
    }
}

#[async_trait]
impl PreferenceStorePort for FilePrefsRepository {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.lock().await.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.values.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&inner.values)
            .context("serialize preferences failed")?;
        self.atomic_write(&content).await?;

        Self::notify(&mut inner, key);
        Ok(())
    }

    async fn watch(&self) -> Result<mpsc::Receiver<PrefChange>> {
        let (tx, rx) = mpsc::channel(WATCH_CHANNEL_CAPACITY);
        self.inner.lock().await.watchers.push(tx);
        Ok(rx)
    }
}

#[async_trait]
impl HomepagePort for FilePrefsRepository {
    async fn localized_homepage(&self) -> Result<String> {
        Ok(self
            .get(keys::HOST_HOMEPAGE)
            .await?
            .unwrap_or_else(|| BLANK_TARGET.to_string()))
    }
}
