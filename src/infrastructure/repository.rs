//! File system repository

use crate::domain::ImageObject;
use crate::error::{Result, ShelfError};
use crate::infrastructure::config::{validate_collection_name, SHELF_DIR};
use crate::infrastructure::{Config, RecordStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for shelf operations
pub trait ShelfRepository {
    /// Get the root directory of this shelf
    fn root(&self) -> &Path;

    /// Load configuration from .snapshelf/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .snapshelf/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .snapshelf directory exists
    fn is_initialized(&self) -> bool;

    /// Create .snapshelf directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ShelfRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover shelf root by walking up from current directory.
    /// First checks SNAPSHELF_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SNAPSHELF_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_shelf_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ShelfError::Config(format!(
                    "SNAPSHELF_ROOT is set to '{}' but no .snapshelf directory found. \
                    Run 'snapshelf init' in that directory or unset SNAPSHELF_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover shelf root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_shelf_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ShelfError::NotShelfDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_shelf_dir(path: &Path) -> bool {
        path.join(SHELF_DIR).is_dir()
    }

    /// Full path of the configured collection file
    pub fn collection_path(&self, config: &Config) -> Result<PathBuf> {
        validate_collection_name(&config.collection)?;
        Ok(self.root.join(SHELF_DIR).join(&config.collection))
    }

    /// Open the configured collection and load it.
    ///
    /// A collection that was never written is treated as empty, matching a
    /// freshly initialised shelf. Every other load failure is returned.
    pub fn open_store(&self) -> Result<RecordStore<ImageObject>> {
        let config = self.load_config()?;
        let path = self.collection_path(&config)?;
        let mut store = RecordStore::with_durability(path, config.durability);

        match store.load_all() {
            Ok(_) => {}
            Err(ShelfError::FileDoesNotExist(path)) => {
                tracing::info!(path = %path.display(), "collection not written yet, starting empty");
            }
            Err(e) => return Err(e),
        }

        Ok(store)
    }
}

impl ShelfRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_shelf_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let shelf_dir = self.root.join(SHELF_DIR);

        if shelf_dir.exists() {
            return Err(ShelfError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&shelf_dir)?;
        Ok(())
    }
}
