//! Add image use case

use crate::domain::{ImageFormat, ImageObject};
use crate::error::{Result, ShelfError};
use crate::infrastructure::FileSystemRepository;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Service for putting new images on the shelf
pub struct AddImageService {
    repository: FileSystemRepository,
}

impl AddImageService {
    /// Create a new add image service
    pub fn new(repository: FileSystemRepository) -> Self {
        AddImageService { repository }
    }

    /// Read each file, check that it is an image, then append it.
    ///
    /// Every file is read and checked before anything is written, so one bad
    /// file leaves the shelf unchanged. Returns the new ids in input order.
    pub fn execute(&self, files: &[PathBuf]) -> Result<Vec<String>> {
        let mut pending = Vec::with_capacity(files.len());
        for file in files {
            let data = fs::read(file)?;
            if ImageFormat::detect(&data).is_none() {
                return Err(ShelfError::UnsupportedImage(file.clone()));
            }
            pending.push(data);
        }

        let mut store = self.repository.open_store()?;
        let mut ids = Vec::with_capacity(pending.len());

        for data in pending {
            let record = ImageObject::new(data, Utc::now());
            let id = record.id.clone();
            let size = record.size();
            store.create(record)?;

            tracing::info!(id = %id, bytes = size, "added image");
            ids.push(id);
        }

        Ok(ids)
    }
}
