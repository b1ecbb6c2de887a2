//! Configuration file watcher for hot reload of the minimum level.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::backend::LevelHandle;
use crate::config::loader::load_config;
use crate::error::Result;
use crate::logger::Level;

/// Watches the configuration file and applies `min_level` changes.
#[derive(Debug, Clone)]
pub struct ConfigWatcher {
    path: PathBuf,
    level: LevelHandle,
}

impl ConfigWatcher {
    pub fn new(path: &Path, level: LevelHandle) -> Self {
        Self {
            path: path.to_path_buf(),
            level,
        }
    }

    /// Reload the file and apply its minimum level.
    ///
    /// On error the current level is kept.
    pub fn reload(&self) -> Result<Level> {
        let config = load_config(&self.path)?;
        let previous = self.level.get();
        self.level.set(config.min_level);
        if previous != config.min_level {
            tracing::info!(from = %previous, to = %config.min_level, "Minimum log level changed");
        }
        Ok(config.min_level)
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher> {
        let path = self.path.clone();
        let this = self;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::debug!("Config file change detected, reloading");
                        if let Err(e) = this.reload() {
                            tracing::error!("Failed to reload config: {}. Keeping current level.", e);
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}
