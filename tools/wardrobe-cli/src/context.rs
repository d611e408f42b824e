//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Utc;
use tracing::debug;
use wardrobe_store::Storefront;

use crate::config::StoreConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["wardrobe.toml", ".wardrobe.toml", "wardrobe.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: StoreConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load the config named by `--config`, or discover one from the
    /// working directory upwards. No file means the demo defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (StoreConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some(path) => {
                    let config = StoreConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (StoreConfig::default(), None),
            },
        };

        match &config_path {
            Some(path) => {
                debug!(path = %path.display(), "Loaded store config");
                output.debug(&format!("Using config: {}", path.display()));
            }
            None => debug!("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// A fresh storefront built from the loaded config.
    pub fn storefront(&self) -> Result<Storefront> {
        self.config.storefront(Utc::now())
    }
}

/// Find the nearest config file from `start` upwards.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wardrobe-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".wardrobe.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join(".wardrobe.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let root = scratch_dir("prefer");
        std::fs::write(root.join("wardrobe.json"), "{}").unwrap();
        std::fs::write(root.join("wardrobe.toml"), "").unwrap();

        assert_eq!(find_config(&root), Some(root.join("wardrobe.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
