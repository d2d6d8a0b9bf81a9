//! Initialize shelf use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ShelfRepository};
use std::fs;
use std::path::Path;

/// Initialize a new shelf at the specified path.
///
/// The collection file itself is written on the first add.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    tracing::info!(root = %path.display(), "initialized shelf");
    Ok(config)
}
