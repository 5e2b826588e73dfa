use std::fs;
use std::path::{Path, PathBuf};

use super::WsmConfig;
use crate::scoring::WeightPercentages;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".wsmrank.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse TOML and replace invalid default weights with the built-in ones.
pub fn parse_and_validate_config(contents: &str) -> Result<WsmConfig, String> {
    let mut config = toml::from_str::<WsmConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(weights) = config.weights {
        if let Err(e) = weights.validate() {
            warn!("{e}. Using default weights.");
            config.weights = Some(WeightPercentages::default());
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<WsmConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<config dir>/wsmrank/config.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wsmrank").join("config.toml"))
}

/// Load an explicitly named file; falls back to defaults on any problem.
pub fn load_config_from(path: &Path) -> WsmConfig {
    try_load_config_from_path(path).unwrap_or_else(|| {
        warn!(
            "Could not load config from {}. Using default config.",
            path.display()
        );
        WsmConfig::default()
    })
}

/// Search the working directory and its ancestors, then the user config dir.
pub fn load_config() -> WsmConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return WsmConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!("No config found. Using default config.");
            WsmConfig::default()
        })
}
