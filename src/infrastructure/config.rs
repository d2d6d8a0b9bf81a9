//! Configuration management

use crate::domain::DurabilityMode;
use crate::error::{Result, ShelfError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding the config and collection file inside a shelf root
pub const SHELF_DIR: &str = ".snapshelf";

/// Config file name inside [`SHELF_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Default collection file name
pub const DEFAULT_COLLECTION: &str = "images.shelf";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub collection: String,
    #[serde(default)]
    pub durability: DurabilityMode,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            collection: DEFAULT_COLLECTION.to_string(),
            durability: DurabilityMode::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .snapshelf/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SHELF_DIR).join(CONFIG_FILENAME);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelfError::NotShelfDirectory(path.to_path_buf())
            } else {
                ShelfError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        validate_collection_name(&config.collection)?;
        Ok(config)
    }

    /// Save config to .snapshelf/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let shelf_dir = path.join(SHELF_DIR);
        let config_path = shelf_dir.join(CONFIG_FILENAME);

        if !shelf_dir.exists() {
            fs::create_dir(&shelf_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

/// The collection must be a bare file name that lives beside config.toml
pub fn validate_collection_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name == CONFIG_FILENAME
        || name.ends_with(".tmp")
        || name.contains('/')
        || name.contains('\\');

    if invalid {
        return Err(ShelfError::Config(format!(
            "Invalid collection name: '{}'. Use a plain file name such as '{}'",
            name, DEFAULT_COLLECTION
        )));
    }
    Ok(())
}
