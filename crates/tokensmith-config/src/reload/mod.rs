//! Live config reload.
//!
//! Watches the config file, re-validates every change and publishes the
//! rebuilt state through a [`tokio::sync::watch`] channel.

mod manager;


pub use manager::{Builder, ReloadManager, Reloaded};
