//! Clipboard polling loop for clipboard-follow mode.
//!
//! The target platform exposes no "clipboard changed" event, so the
//! clipboard is sampled on a fixed interval while the mode is active.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use nto_core::ports::{ClipboardPort, OverrideSinkPort};
use nto_core::{uri, NewTabTarget};

/// 2 Hz sampling: the accepted tradeoff between responsiveness and
/// overhead for a poll-only clipboard.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Clipboard text longer than this is never considered a target.
pub const URL_CHARS_LIMIT: usize = 2000;

/// Samples the clipboard while running and pushes each newly accepted URL
/// to the override sink.
///
/// State machine: Stopped → Running on [`start`](Self::start), Running →
/// Stopped on [`stop`](Self::stop). Starting a running poller is a no-op
/// that keeps the dedupe state; stopping always clears it. The tick body
/// and both transitions share one mutex, so `stop` returning guarantees
/// that no further emission reaches the sink.
pub struct ClipboardUrlPoller {
    clipboard: Arc<dyn ClipboardPort>,
    interval: Duration,
    state: Arc<Mutex<PollerState>>,
}

#[derive(Default)]
struct PollerState {
    running: bool,
    last_accepted: Option<String>,
    task: Option<AbortHandle>,
}

impl ClipboardUrlPoller {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, interval: Duration) -> Self {
        Self {
            clipboard,
            interval,
            state: Arc::new(Mutex::new(PollerState::default())),
        }
    }

    /// Enter the Running state and begin sampling.
    ///
    /// Accepted URLs are applied through `sink`. Idempotent while running.
    pub async fn start(&self, sink: Arc<dyn OverrideSinkPort>) {
        let mut state = self.state.lock().await;
        if state.running {
            return;
        }
        state.running = true;

        let clipboard = Arc::clone(&self.clipboard);
        let shared = Arc::clone(&self.state);
        let period = self.interval;

        let mut ticker = tokio::time::interval(period);
        // Delay rather than burst after a missed tick: at most one tick
        // in flight at a time.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it here
        // so the first sample lands one period after start.
        ticker.tick().await;

        let task = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                let mut state = shared.lock().await;
                if !state.running {
                    break;
                }
                Self::tick(clipboard.as_ref(), &mut state, sink.as_ref()).await;
            }
        });
        state.task = Some(task.abort_handle());
        debug!(period_ms = period.as_millis() as u64, "clipboard poller started");
    }

    /// Leave the Running state, clearing the dedupe state.
    ///
    /// Effective immediately: an in-flight tick finishes before this
    /// returns, and no tick fires afterwards. Idempotent while stopped.
    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        if let Some(task) = state.task.take() {
            task.abort();
        }
        if state.running {
            debug!("clipboard poller stopped");
        }
        state.running = false;
        state.last_accepted = None;
    }

    pub async fn is_running(&self) -> bool {
        self.state.lock().await.running
    }

    /// One sample: read, validate, dedupe, emit. Every recognized failure
    /// degrades to "do nothing this cycle".
    async fn tick(clipboard: &dyn ClipboardPort, state: &mut PollerState, sink: &dyn OverrideSinkPort) {
        let text = match clipboard.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(err) => {
                debug!(error = %err, "clipboard read failed, skipping tick");
                return;
            }
        };

        if text.chars().count() > URL_CHARS_LIMIT {
            debug!("clipboard text exceeds length ceiling, skipping tick");
            return;
        }
        if !uri::is_acceptable(&text) {
            return;
        }
        if state.last_accepted.as_deref() == Some(text.as_str()) {
            return;
        }

        info!(url = %text, "accepted clipboard url");
        state.last_accepted = Some(text.clone());
        if let Err(err) = sink.apply(&NewTabTarget::from(text)).await {
            warn!(error = %err, "override sink rejected clipboard url");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nto_core::ports::ClipboardError;
    use std::sync::Mutex as StdMutex;
    use tokio::time::advance;

    struct ScriptedClipboard {
        current: StdMutex<Result<Option<String>, String>>,
    }

    impl ScriptedClipboard {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                current: StdMutex::new(Ok(None)),
            })
        }

        fn with_text(text: &str) -> Arc<Self> {
            let clipboard = Self::empty();
            clipboard.set_text(text);
            clipboard
        }

        fn set_text(&self, text: &str) {
            *self.current.lock().unwrap() = Ok(Some(text.to_string()));
        }

        fn fail(&self, message: &str) {
            *self.current.lock().unwrap() = Err(message.to_string());
        }
    }

    impl ClipboardPort for ScriptedClipboard {
        fn read_text(&self) -> Result<Option<String>, ClipboardError> {
            self.current
                .lock()
                .unwrap()
                .clone()
                .map_err(ClipboardError::Unavailable)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        applied: StdMutex<Vec<String>>,
    }

    impl RecordingSink {
        fn applied(&self) -> Vec<String> {
            self.applied.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OverrideSinkPort for RecordingSink {
        async fn apply(&self, target: &NewTabTarget) -> anyhow::Result<()> {
            self.applied.lock().unwrap().push(target.as_str().to_string());
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    async fn run_ticks(count: u32) {
        for _ in 0..count {
            advance(DEFAULT_POLL_INTERVAL).await;
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
        }
    }

    fn poller(clipboard: Arc<ScriptedClipboard>) -> ClipboardUrlPoller {
        ClipboardUrlPoller::new(clipboard, DEFAULT_POLL_INTERVAL)
    }

    #[tokio::test]
    async fn emits_once_for_unchanged_value() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("https://news.example/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(2).await;

        assert_eq!(sink.applied(), vec!["https://news.example/"]);
        poller.stop().await;
    }

    #[tokio::test]
    async fn emits_again_when_value_changes() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("https://a.example/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(1).await;
        clipboard.set_text("https://b.example/");
        run_ticks(1).await;

        assert_eq!(
            sink.applied(),
            vec!["https://a.example/", "https://b.example/"]
        );
        poller.stop().await;
    }

    #[tokio::test]
    async fn skips_private_hosts() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("http://192.168.1.1/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(3).await;

        assert!(sink.applied().is_empty());
        poller.stop().await;
    }

    #[tokio::test]
    async fn skips_text_over_length_ceiling() {
        tokio::time::pause();
        let long_url = format!("https://example.com/{}", "a".repeat(URL_CHARS_LIMIT));
        let clipboard = ScriptedClipboard::with_text(&long_url);
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(2).await;

        assert!(sink.applied().is_empty());
        poller.stop().await;
    }

    #[tokio::test]
    async fn tolerates_empty_clipboard_and_read_failures() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::empty();
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(1).await;
        clipboard.fail("clipboard locked");
        run_ticks(1).await;
        clipboard.set_text("https://example.com/");
        run_ticks(1).await;

        assert_eq!(sink.applied(), vec!["https://example.com/"]);
        poller.stop().await;
    }

    #[tokio::test]
    async fn stop_clears_dedupe_state() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("https://example.com/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(1).await;
        poller.stop().await;

        poller.start(sink.clone()).await;
        run_ticks(1).await;

        // The same value is re-accepted after a stop/start cycle.
        assert_eq!(
            sink.applied(),
            vec!["https://example.com/", "https://example.com/"]
        );
        poller.stop().await;
    }

    #[tokio::test]
    async fn start_while_running_keeps_dedupe_state() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("https://example.com/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        run_ticks(1).await;
        poller.start(sink.clone()).await;
        run_ticks(2).await;

        assert_eq!(sink.applied(), vec!["https://example.com/"]);
        poller.stop().await;
    }

    #[tokio::test]
    async fn no_tick_fires_after_stop() {
        tokio::time::pause();
        let clipboard = ScriptedClipboard::with_text("https://example.com/");
        let sink = Arc::new(RecordingSink::default());
        let poller = poller(Arc::clone(&clipboard));

        poller.start(sink.clone()).await;
        poller.stop().await;
        run_ticks(5).await;

        assert!(sink.applied().is_empty());
    }

    #[tokio::test]
    async fn state_transitions() {
        tokio::time::pause();
        let poller = poller(ScriptedClipboard::empty());
        let sink = Arc::new(RecordingSink::default());

        assert!(!poller.is_running().await);
        poller.start(sink.clone()).await;
        assert!(poller.is_running().await);
        poller.stop().await;
        assert!(!poller.is_running().await);
        // stop is idempotent
        poller.stop().await;
        assert!(!poller.is_running().await);
    }
}
