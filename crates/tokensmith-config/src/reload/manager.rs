//! Validated, versioned config reloads.

use crate::schema::TokensmithConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use std::sync::Arc;
use tokensmith_common::TokensmithError;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

/// Turns a validated config into whatever the consumer serves from it,
/// typically a token resolver plus the active variable set.
pub type Builder<T> = dyn Fn(&TokensmithConfig) -> Result<T, TokensmithError> + Send + Sync;

/// One published state: the config and what was built from it.
///
/// `generation` starts at 1 for the initial load and increases with every
/// accepted reload. Rejected reloads never consume a generation.
#[derive(Debug)]
pub struct Reloaded<T> {
    pub generation: u64,
    pub config: TokensmithConfig,
    pub built: T,
}

/// Keeps a built state in sync with the config file on disk.
///
/// Every candidate config is loaded, validated and built before it is
/// published. A candidate that fails any step is logged and dropped, and
/// subscribers keep the last good state.
pub struct ReloadManager<T> {
    config_path: PathBuf,
    extra_paths: Vec<PathBuf>,
    build: Box<Builder<T>>,
    generation: u64,
}

impl<T: Send + Sync + 'static> ReloadManager<T> {
    pub fn new<F>(config_path: PathBuf, build: F) -> Self
    where
        F: Fn(&TokensmithConfig) -> Result<T, TokensmithError> + Send + Sync + 'static,
    {
        Self {
            config_path,
            extra_paths: Vec::new(),
            build: Box::new(build),
            generation: 0,
        }
    }

    /// Also reload when these files change (variable set files, for
    /// instance). The config file is always watched.
    pub fn watch_also(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.extra_paths.extend(paths);
        self
    }

    /// Build the initial state and start watching.
    ///
    /// Unlike later reloads, a bad initial config is an error: there is no
    /// previous state to fall back to. Must be called inside a tokio runtime.
    pub fn start(mut self) -> Result<watch::Receiver<Arc<Reloaded<T>>>, TokensmithError> {
        let initial = self.next_state()?;
        info!(
            path = %self.config_path.display(),
            generation = initial.generation,
            "loaded initial config"
        );

        let mut paths = vec![self.config_path.clone()];
        paths.extend(self.extra_paths.iter().cloned());
        let watcher = ConfigWatcher::with_paths(paths)?;

        let (state_tx, state_rx) = watch::channel(Arc::new(initial));
        tokio::spawn(self.follow(watcher, state_tx));
        Ok(state_rx)
    }

    fn next_state(&mut self) -> Result<Reloaded<T>, TokensmithError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        let built = (self.build)(&config)?;
        self.generation += 1;
        Ok(Reloaded {
            generation: self.generation,
            config,
            built,
        })
    }

    async fn follow(
        mut self,
        watcher: ConfigWatcher,
        state_tx: watch::Sender<Arc<Reloaded<T>>>,
    ) {
        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                // A lagged receiver still means the files changed.
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("config watcher closed");
                    return;
                }
            }

            match self.next_state() {
                Ok(state) => {
                    info!(generation = state.generation, "published reloaded config");
                    if state_tx.send(Arc::new(state)).is_err() {
                        debug!("no subscribers left, stopping reloads");
                        return;
                    }
                }
                Err(e) => warn!(
                    serving = self.generation,
                    "rejected config reload, keeping the current state: {e}"
                ),
            }
        }
    }

    /// Reload once without waiting for a file event.
    pub fn reload_now(&mut self) -> Result<Reloaded<T>, TokensmithError> {
        self.next_state()
    }
}
