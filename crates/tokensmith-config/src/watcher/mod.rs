//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file (and variable set
//! files) for changes, with a 500ms debounce to avoid rapid reloads.

mod config_watcher;


pub use config_watcher::ConfigWatcher;
