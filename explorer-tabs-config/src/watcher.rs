//! Settings file watcher.
//!
//! The tab bar reads its sizing policy once at start-up and again whenever the
//! settings are reloaded. `ConfigWatcher` turns edits of `config.yaml` into
//! [`ConfigReloadEvent`]s the host drains from its event loop with
//! [`ConfigWatcher::try_recv`], then feeds the re-read `Config` back into the bar.

use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Poll interval used when the native backend is unavailable.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The watched settings file changed and should be reloaded.
#[derive(Debug, Clone)]
pub struct ConfigReloadEvent {
    /// Path to the settings file that changed.
    pub path: PathBuf,
}

/// Filters raw notify events down to debounced reload events for one file.
#[derive(Clone)]
struct ReloadFilter {
    file_name: OsString,
    path: PathBuf,
    debounce: Duration,
    last_sent: Arc<Mutex<Option<Instant>>>,
    tx: Sender<ConfigReloadEvent>,
}

impl ReloadFilter {
    fn handle(&self, result: notify::Result<Event>) {
        let Ok(event) = result else {
            return;
        };
        // Create covers editors that save by writing a temp file and renaming it over
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return;
        }
        if !event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|f| f == self.file_name))
        {
            return;
        }

        {
            let now = Instant::now();
            let mut last = self.last_sent.lock();
            if last.is_some_and(|at| now.duration_since(at) < self.debounce) {
                log::trace!("Debouncing settings reload event");
                return;
            }
            *last = Some(now);
        }

        log::info!("Settings file changed: {}", self.path.display());
        if let Err(e) = self.tx.send(ConfigReloadEvent {
            path: self.path.clone(),
        }) {
            log::error!("Failed to send settings reload event: {}", e);
        }
    }
}

/// Watches the settings file and queues reload events.
pub struct ConfigWatcher {
    /// Kept alive to maintain the watch.
    _watcher: Box<dyn Watcher + Send>,
    events: Receiver<ConfigReloadEvent>,
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").finish_non_exhaustive()
    }
}

impl ConfigWatcher {
    /// Start watching `config_path`.
    ///
    /// Uses the platform's native watcher and falls back to polling when the
    /// native backend cannot be created (containers, network filesystems).
    /// Events arriving within `debounce_delay_ms` of the previous one are dropped.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist or neither backend can watch it.
    pub fn new(config_path: &Path, debounce_delay_ms: u64) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }

        let path = config_path
            .canonicalize()
            .unwrap_or_else(|_| config_path.to_path_buf());
        let file_name = path
            .file_name()
            .context("Config path has no filename")?
            .to_os_string();
        let parent = path
            .parent()
            .context("Config path has no parent directory")?
            .to_path_buf();

        let (tx, events) = channel();
        let filter = ReloadFilter {
            file_name,
            path: path.clone(),
            debounce: Duration::from_millis(debounce_delay_ms),
            last_sent: Arc::new(Mutex::new(None)),
            tx,
        };

        let mut watcher = Self::create_watcher(filter)?;
        watcher
            .watch(&parent, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch config directory: {}", parent.display()))?;

        log::info!("Settings reload: watching {}", path.display());

        Ok(Self {
            _watcher: watcher,
            events,
        })
    }

    fn create_watcher(filter: ReloadFilter) -> Result<Box<dyn Watcher + Send>> {
        let native = filter.clone();
        match notify::recommended_watcher(move |res: notify::Result<Event>| native.handle(res)) {
            Ok(w) => {
                log::debug!("Settings watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Settings watcher: native backend unavailable ({}); falling back to polling",
                    e
                );
                let poll = PollWatcher::new(
                    move |res: notify::Result<Event>| filter.handle(res),
                    NotifyConfig::default().with_poll_interval(POLL_INTERVAL),
                )
                .context("Failed to create fallback PollWatcher")?;
                Ok(Box::new(poll))
            }
        }
    }

    /// Next pending reload event, if any (non-blocking).
    pub fn try_recv(&self) -> Option<ConfigReloadEvent> {
        self.events.try_recv().ok()
    }
}
