// Configuration loading

use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_TASKS_FILENAME: &str = ".todo_cli.json";

/// Settings read from `todo.yml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backing task file
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self =
            serde_yaml::from_str(&content).wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(file = ?path, ?config, "Loaded config");
        Ok(config)
    }

    /// Pick the task file: `override_path`, then the configured file, then the default
    pub fn tasks_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path.or_else(|| self.file.clone()) {
            return Ok(expand_tilde(path));
        }
        default_tasks_path()
    }
}

/// Default config location: `<config dir>/todo/todo.yml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todo").join("todo.yml"))
}

/// Default task file: `~/.todo_cli.json`
pub fn default_tasks_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_TASKS_FILENAME))
        .ok_or_else(|| eyre!("Could not determine home directory"))
}

fn expand_tilde(path: PathBuf) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map(|home| home.join(rest)).unwrap_or(path),
        Err(_) => path,
    }
}
