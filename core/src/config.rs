//! Run configuration.
//!
//! Every directory involved in a run is carried explicitly so that tests
//! (and the CLI flags) can redirect any of them independently. `locate`
//! resolves the stock layout under the user's home directory.

use dirs::home_dir;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Relative path of the Spotlight asset cache below the home directory.
const ASSET_CACHE_COMPONENTS: &[&str] = &[
    "AppData",
    "Local",
    "Packages",
    "Microsoft.Windows.ContentDeliveryManager_cw5n1h2txyewy",
    "LocalState",
    "Assets",
];

/// Parameters for a single extraction run.
#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    /// Directory holding the opaque, extensionless cache files.
    pub source_dir: PathBuf,
    /// Root under which the sorted wallpapers, staging area, and history
    /// file live.
    pub dest_root: PathBuf,
    pub staging_dir_name: String,
    pub horizontal_dir_name: String,
    pub vertical_dir_name: String,
    pub log_file_name: String,
}

impl ExtractorConfig {
    /// Builds a configuration rooted at the stock locations under the
    /// user's home directory.
    pub fn locate() -> Result<Self, ConfigError> {
        let home = home_dir().ok_or(ConfigError::HomeNotFound)?;
        let mut source_dir = home.clone();
        for component in ASSET_CACHE_COMPONENTS {
            source_dir.push(component);
        }
        let dest_root = home.join("Pictures").join("WallPapers");
        Ok(Self::new(source_dir, dest_root))
    }

    /// Builds a configuration with the default sub-directory and log-file
    /// names under the supplied source and destination roots.
    pub fn new(source_dir: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            source_dir,
            dest_root,
            staging_dir_name: String::from("temp"),
            horizontal_dir_name: String::from("horizontal"),
            vertical_dir_name: String::from("vertical"),
            log_file_name: String::from("log.csv"),
        }
    }

    pub fn with_source_dir(mut self, source_dir: PathBuf) -> Self {
        self.source_dir = source_dir;
        self
    }

    pub fn with_dest_root(mut self, dest_root: PathBuf) -> Self {
        self.dest_root = dest_root;
        self
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.dest_root.join(&self.staging_dir_name)
    }

    pub fn horizontal_dir(&self) -> PathBuf {
        self.dest_root.join(&self.horizontal_dir_name)
    }

    pub fn vertical_dir(&self) -> PathBuf {
        self.dest_root.join(&self.vertical_dir_name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dest_root.join(&self.log_file_name)
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeNotFound,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeNotFound => write!(f, "could not determine the user home directory"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_hang_off_dest_root() {
        let config = ExtractorConfig::new(PathBuf::from("/cache"), PathBuf::from("/walls"));
        assert_eq!(config.staging_dir(), PathBuf::from("/walls/temp"));
        assert_eq!(config.horizontal_dir(), PathBuf::from("/walls/horizontal"));
        assert_eq!(config.vertical_dir(), PathBuf::from("/walls/vertical"));
        assert_eq!(config.log_path(), PathBuf::from("/walls/log.csv"));
        assert_eq!(config.source_dir(), Path::new("/cache"));
    }

    #[test]
    fn overrides_replace_roots_independently() {
        let config = ExtractorConfig::new(PathBuf::from("/cache"), PathBuf::from("/walls"))
            .with_source_dir(PathBuf::from("/other-cache"))
            .with_dest_root(PathBuf::from("/other-walls"));
        assert_eq!(config.source_dir(), Path::new("/other-cache"));
        assert_eq!(config.log_path(), PathBuf::from("/other-walls/log.csv"));
    }

    #[test]
    fn locate_targets_the_spotlight_cache() {
        if let Ok(config) = ExtractorConfig::locate() {
            assert!(config.source_dir.ends_with(Path::new("LocalState/Assets")));
            assert!(config.dest_root.ends_with(Path::new("Pictures/WallPapers")));
        }
    }
}
