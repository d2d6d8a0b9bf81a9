//! Export image use case

use crate::domain::{ImageObject, ImageSelector};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use std::path::Path;

/// Service for copying a stored image back out to a regular file
pub struct ExportImageService {
    repository: FileSystemRepository,
}

impl ExportImageService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ExportImageService { repository }
    }

    /// Write the selected image's bytes to `output`, returning the exported record
    pub fn execute(&self, selector: &ImageSelector, output: &Path) -> Result<ImageObject> {
        let store = self.repository.open_store()?;
        let index = selector.resolve(store.records())?;
        let record = store.records()[index].clone();

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output, &record.image_data)?;

        tracing::info!(id = %record.id, output = %output.display(), "exported image");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::infrastructure::{Config, ShelfRepository};
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_export_by_index_and_id() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let mut store = repo.open_store().unwrap();
        let record = ImageObject::new(b"GIF89a-pixels".to_vec(), Utc::now());
        store.create(record.clone()).unwrap();

        let service = ExportImageService::new(repo);

        let by_index = temp.path().join("out").join("first.gif");
        service.execute(&ImageSelector::Index(0), &by_index).unwrap();
        assert_eq!(fs::read(&by_index).unwrap(), record.image_data);

        let by_id = temp.path().join("second.gif");
        let exported = service
            .execute(&ImageSelector::Id(record.id.clone()), &by_id)
            .unwrap();
        assert_eq!(exported, record);
        assert_eq!(fs::read(&by_id).unwrap(), record.image_data);
    }

    #[test]
    fn test_export_out_of_range_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let output = temp.path().join("nothing.png");
        let err = ExportImageService::new(repo)
            .execute(&ImageSelector::Index(0), &output)
            .unwrap_err();

        assert!(matches!(err, ShelfError::IndexOutOfRange { .. }));
        assert!(!output.exists());
    }
}
