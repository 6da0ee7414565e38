use std::path::{Path, PathBuf};
use std::fs;
use std::time::Duration;
use anyhow::{Result, Context};
use directories::ProjectDirs;

/// Inspiration list location, relative to the posting feature directory
pub const DEFAULT_INSPIRATION_LOCATION: &str = "../../../激励文字词库.json";

/// Where the posting feature lives inside the site tree
pub const DEFAULT_FEATURE_SUBDIR: &str = "src/modules/posts";

pub const STORAGE_FILE_NAME: &str = "local_storage.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub storage_file: PathBuf,

    pub feature_dir: PathBuf,
    pub inspiration_location: String,
    pub inspiration_timeout: Option<Duration>,
}

impl Config {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "cheerpost", "cheerpost")
            .context("Failed to get project directories")?;
        let config_dir = proj_dirs.config_dir().to_path_buf();
        let feature_dir = std::env::current_dir()
            .context("Failed to read current directory")?
            .join(DEFAULT_FEATURE_SUBDIR);

        Self::build(config_dir, feature_dir)
    }

    /// Same layout as `new`, rooted at `root` instead of the per-user directories.
    pub fn with_root(root: &Path) -> Result<Self> {
        Self::build(root.join("config"), root.join(DEFAULT_FEATURE_SUBDIR))
    }

    fn build(config_dir: PathBuf, feature_dir: PathBuf) -> Result<Self> {
        // Create directories if they don't exist
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config_dir: {:?}", config_dir))?;
        log::debug!("Using config_dir: {:?}", config_dir);

        let storage_file = config_dir.join(STORAGE_FILE_NAME);

        Ok(Config {
            config_dir,
            storage_file,
            feature_dir,
            inspiration_location: DEFAULT_INSPIRATION_LOCATION.to_string(),
            inspiration_timeout: None,
        })
    }

    /// Point the config at another config directory, keeping the rest.
    pub fn set_config_dir(&mut self, config_dir: PathBuf) -> Result<()> {
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config_dir: {:?}", config_dir))?;
        self.storage_file = config_dir.join(STORAGE_FILE_NAME);
        self.config_dir = config_dir;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_lays_out_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path()).unwrap();

        assert!(config.config_dir.is_dir());
        assert_eq!(config.storage_file, dir.path().join("config").join(STORAGE_FILE_NAME));
        assert_eq!(config.feature_dir, dir.path().join("src/modules/posts"));
        assert_eq!(config.inspiration_location, DEFAULT_INSPIRATION_LOCATION);
        assert!(config.inspiration_timeout.is_none());
    }

    #[test]
    fn set_config_dir_moves_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_root(dir.path()).unwrap();
        let other = dir.path().join("elsewhere");

        config.set_config_dir(other.clone()).unwrap();

        assert!(other.is_dir());
        assert_eq!(config.storage_file, other.join(STORAGE_FILE_NAME));
    }
}
