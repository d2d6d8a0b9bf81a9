//! Delete image use case

use crate::domain::{ImageObject, ImageSelector};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for removing images from the shelf
pub struct DeleteImageService {
    repository: FileSystemRepository,
}

impl DeleteImageService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DeleteImageService { repository }
    }

    /// Remove the selected image and return it.
    /// Ids are resolved to a position first; the store only deletes by position.
    pub fn execute(&self, selector: &ImageSelector) -> Result<ImageObject> {
        let mut store = self.repository.open_store()?;
        let index = selector.resolve(store.records())?;
        let removed = store.delete_at(index)?;

        tracing::info!(id = %removed.id, index, "deleted image");
        Ok(removed)
    }
}
