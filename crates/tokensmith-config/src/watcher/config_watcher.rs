//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors the config file and
//! any variable set files for changes using the `notify` crate, with
//! debounced notifications.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokensmith_common::ConfigError;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Changes closer together than this are coalesced into one signal.
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(500);

/// Watches config-related files for changes and sends notifications.
pub struct ConfigWatcher {
    paths: Vec<PathBuf>,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        Self::with_paths(vec![path])
    }

    /// Create a watcher for several files (config plus variable sets).
    pub fn with_paths(paths: Vec<PathBuf>) -> Result<Self, ConfigError> {
        if paths.is_empty() {
            return Err(ConfigError::WatchError("no files to watch".into()));
        }
        for path in &paths {
            if !path.exists() {
                warn!(
                    "{} does not exist yet, will watch for creation",
                    path.display()
                );
            }
        }
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Directories to register with the OS watcher. Editors save by
    /// writing a new file and renaming it, so the parent is watched rather
    /// than the file itself.
    fn watch_dirs(&self) -> BTreeSet<PathBuf> {
        self.paths
            .iter()
            .map(|p| match p.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            })
            .collect()
    }

    fn file_names(&self) -> BTreeSet<OsString> {
        self.paths
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .collect()
    }

    /// Watch the files for changes, sending a signal on the broadcast channel.
    ///
    /// This function runs until the sender side of the notify bridge closes.
    /// Changes are debounced to avoid rapid reloads when editors do atomic
    /// save (write + rename).
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let file_names = self.file_names();

        for path in &self.paths {
            info!("starting config file watcher for {}", path.display());
        }

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    if event.paths.iter().any(|p| is_watched(p, &file_names)) {
                        debug!("config file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => {
                    error!("file watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        for dir in self.watch_dirs() {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display()))
                })?;
        }

        // Debounce loop: wait for change signals, coalesce within the window
        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config files changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        Ok(())
    }
}

fn is_watched(path: &Path, file_names: &BTreeSet<OsString>) -> bool {
    path.file_name()
        .map(|n| file_names.contains(n))
        .unwrap_or(false)
}
