use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PictowhackError, Result};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".pictowhack.toml";

/// Config file name inside the user config directory (`<config_dir>/pictowhack/`)
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# pictowhack configuration file

[scan]
# Match files and directories whose names start with '.' even when the
# pattern does not spell out the leading dot
# Default: false
include_hidden = false

# Directory names to skip when expanding patterns
# Default: []
# Example: exclude = [".git", "node_modules", "target"]
exclude = []
"#;

/// Per-run options, passed explicitly to the runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Report changes without writing files
    pub dry_run: bool,
    /// Also report unchanged files, skipped directories and each removed character
    pub verbose: bool,
}

/// File configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Pattern expansion settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Match hidden entries without a literal leading dot
    #[serde(default)]
    pub include_hidden: bool,

    /// Directory names to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load config from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PictowhackError::file_io(path, e))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| PictowhackError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Find the config file to use.
    ///
    /// Priority: explicit path > `.pictowhack.toml` in `cwd` > user config dir.
    /// Returns `None` when nothing exists.
    pub fn discover(
        explicit: Option<PathBuf>,
        cwd: &Path,
        user_config_dir: Option<&Path>,
    ) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        user_config_dir
            .map(|dir| dir.join("pictowhack").join(USER_CONFIG_FILE))
            .filter(|p| p.is_file())
    }

    /// Write the default template to `path` unless it already exists
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PictowhackError::file_io(parent, e))?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| PictowhackError::file_io(path, e))?;
        Ok(())
    }

    /// Merge CLI overrides on top of the file settings
    pub fn with_overrides(mut self, include_hidden: bool, exclude: &[String]) -> Self {
        if include_hidden {
            self.scan.include_hidden = true;
        }
        for dir in exclude {
            if !self.scan.exclude.contains(dir) {
                self.scan.exclude.push(dir.clone());
            }
        }
        self
    }
}
