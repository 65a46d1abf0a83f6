//! Command implementations behind the CLI subcommands.

pub mod browse;
pub mod categories;
pub mod display;
pub mod run;
pub mod search;
pub mod show;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content::ContentStore;

/// Loaded configuration and content shared by every command.
pub struct AppContext {
    pub config: Config,
    pub store: ContentStore,
}

impl AppContext {
    /// Resolve the config, then load content from `content_dir` (flag),
    /// the configured directory, or the bundled modules.
    pub fn load(config_path: Option<&Path>, content_dir: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load configuration")?;

        let dir = content_dir.or(config.content_dir.as_deref());
        let store = match dir {
            Some(dir) => ContentStore::from_dir(dir)
                .with_context(|| format!("Failed to load content from {}", dir.display()))?,
            None => ContentStore::embedded().context("Failed to load bundled content")?,
        };
        info!(items = store.len(), "context ready");

        Ok(Self { config, store })
    }
}
