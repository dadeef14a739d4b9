//! Configuration loading
//!
//! Reads `~/.config/autosuggest/config.toml`. A missing file means defaults;
//! a file that exists but does not parse is an error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, SourceConfig, SourceKind, DEFAULT_REMOTE_URL};

use crate::error::AutosuggestError;

const CONFIG_DIR: &str = "autosuggest";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> Result<Config, AutosuggestError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AutosuggestError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| AutosuggestError::Config {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
