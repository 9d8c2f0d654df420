use crate::check::Baseline;
use crate::error::{Result, VersionTagError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "./versiontagcheck.toml";
const USER_CONFIG: &str = ".versiontagcheck.toml";

/// Represents the complete configuration for version-tag-check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// How a candidate tag is checked.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CheckConfig {
    /// Check that the tag exists instead of validating it as a new tag
    #[serde(default)]
    pub should_exist: bool,

    #[serde(default)]
    pub baseline: Baseline,
}

/// Where the tags are read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repository_path(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiontagcheck.toml` in current directory
/// 3. `.versiontagcheck.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG).exists() {
        PathBuf::from(LOCAL_CONFIG)
    } else {
        match dirs::config_dir().map(|dir| dir.join(USER_CONFIG)) {
            Some(user_path) if user_path.exists() => user_path,
            _ => return Ok(Config::default()),
        }
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionTagError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| VersionTagError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
