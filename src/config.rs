use crate::error::{DevscriptsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "devscripts.toml";

/// Represents the complete configuration for devscripts.
///
/// Contains package metadata, the script glob and the version backend.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub scripts: ScriptsConfig,

    #[serde(default)]
    pub version: VersionConfig,
}

fn default_name() -> String {
    "devscripts".to_string()
}

fn default_description() -> String {
    "Scripts often used in software development.".to_string()
}

fn default_author() -> String {
    "Toon Verstraelen".to_string()
}

fn default_author_email() -> String {
    "Toon.Verstraelen@UGent.be".to_string()
}

/// Returns the default trove classifiers.
fn default_classifiers() -> Vec<String> {
    vec![
        "Environment :: Console".to_string(),
        "License :: OSI Approved :: GNU General Public License v3 or later (GPLv3+)".to_string(),
        "Operating System :: POSIX :: Linux".to_string(),
        "Programming Language :: Python :: 2.7".to_string(),
        "Programming Language :: Python :: 3".to_string(),
    ]
}

/// Package metadata copied into the manifest unchanged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_author_email")]
    pub author_email: String,

    #[serde(default = "default_classifiers")]
    pub classifiers: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            name: default_name(),
            description: default_description(),
            author: default_author(),
            author_email: default_author_email(),
            classifiers: default_classifiers(),
        }
    }
}

fn default_pattern() -> String {
    "scripts/*".to_string()
}

/// Which files are installed as executables.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScriptsConfig {
    /// Glob relative to the project root
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        ScriptsConfig {
            pattern: default_pattern(),
        }
    }
}

/// How describe output is obtained.
///
/// Config files and the command line share the [std::str::FromStr] parsing.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Backend {
    /// Run the git binary
    #[default]
    Git,
    /// Use libgit2 in-process
    Git2,
}

impl std::str::FromStr for Backend {
    type Err = DevscriptsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(Backend::Git),
            "git2" | "libgit2" => Ok(Backend::Git2),
            other => Err(DevscriptsError::config(format!(
                "Unknown version backend '{}' (expected 'git' or 'git2')",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = DevscriptsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Backend> for String {
    fn from(backend: Backend) -> Self {
        backend.to_string()
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Git => write!(f, "git"),
            Backend::Git2 => write!(f, "git2"),
        }
    }
}

fn default_git_program() -> PathBuf {
    PathBuf::from("git")
}

/// Configuration for version derivation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Executable used by the `git` backend
    #[serde(default = "default_git_program")]
    pub git_program: PathBuf,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            backend: Backend::default(),
            git_program: default_git_program(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `devscripts.toml` in current directory
/// 3. `devscripts.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
        .map_err(|e| DevscriptsError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| DevscriptsError::config(e.to_string()))
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
