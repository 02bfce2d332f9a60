//! File locations and persistence of the store between CLI runs.
//!
//! The CLI keeps the whole [`EntityStore`] in one JSON state file so that a
//! league joined in one invocation is still joined in the next.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::Result, store::EntityStore};

const APP_DIR: &str = "fpl-nexus";

fn base_dir(dir: Option<PathBuf>, fallback: &str) -> PathBuf {
    dir.unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(fallback);
        home
    })
}

/// Path: ~/.cache/fpl-nexus/state.json
pub fn default_state_path() -> PathBuf {
    base_dir(dirs::cache_dir(), ".cache")
        .join(APP_DIR)
        .join("state.json")
}

/// Path: ~/.config/fpl-nexus/config.json
pub fn default_config_path() -> PathBuf {
    base_dir(dirs::config_dir(), ".config")
        .join(APP_DIR)
        .join("config.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Load a saved store. A missing file yields `None`; a corrupt one is an error.
pub fn load_store(path: &Path) -> Result<Option<EntityStore>> {
    match try_read_to_string(path) {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save_store(path: &Path, store: &EntityStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    write_string(path, &json)?;
    Ok(())
}
