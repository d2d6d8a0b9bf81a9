//! Config management use case

use crate::domain::DurabilityMode;
use crate::error::{Result, ShelfError};
use crate::infrastructure::config::validate_collection_name;
use crate::infrastructure::{Config, FileSystemRepository, ShelfRepository};
use std::str::FromStr;

/// Service for managing shelf configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "collection" => Ok(config.collection.clone()),
            "durability" => Ok(config.durability.as_str().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ShelfError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: collection, durability, created",
                key
            ))),
        }
    }

    /// Set a config value.
    ///
    /// Changing `collection` points the shelf at another file; the old file
    /// is left where it is.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "collection" => {
                validate_collection_name(value)?;
                config.collection = value.to_string();
            }
            "durability" => {
                config.durability = DurabilityMode::from_str(value).map_err(ShelfError::Config)?;
            }
            "created" => {
                return Err(ShelfError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: collection, durability",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
