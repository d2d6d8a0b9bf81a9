//! List images use case

use crate::domain::{ImageFormat, ImageObject};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};

/// What the listing shows for one stored image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub index: usize,
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub size: usize,
    pub format: Option<ImageFormat>,
}

impl ImageSummary {
    pub fn from_record(index: usize, record: &ImageObject) -> Self {
        ImageSummary {
            index,
            id: record.id.clone(),
            created_at: record.created_at,
            size: record.size(),
            format: ImageFormat::detect(&record.image_data),
        }
    }
}

/// Service for listing shelf contents
pub struct ListImagesService {
    repository: FileSystemRepository,
}

impl ListImagesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListImagesService { repository }
    }

    /// Summaries in stored order
    pub fn execute(&self) -> Result<Vec<ImageSummary>> {
        let store = self.repository.open_store()?;

        Ok(store
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| ImageSummary::from_record(index, record))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{Config, ShelfRepository};
    use tempfile::TempDir;

    #[test]
    fn test_list_empty_shelf() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let service = ListImagesService::new(repo);
        assert!(service.execute().unwrap().is_empty());
    }

    #[test]
    fn test_list_reports_format_and_size() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let mut store = repo.open_store().unwrap();
        let jpeg = ImageObject::new(vec![0xFF, 0xD8, 0xFF, 0xDB, 0x00], Utc::now());
        let unknown = ImageObject::new(vec![0, 1, 2], Utc::now());
        store.create(jpeg.clone()).unwrap();
        store.create(unknown).unwrap();

        let summaries = ListImagesService::new(repo).execute().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].index, 0);
        assert_eq!(summaries[0].id, jpeg.id);
        assert_eq!(summaries[0].size, 5);
        assert_eq!(summaries[0].format, Some(ImageFormat::Jpeg));
        assert_eq!(summaries[1].format, None);
    }
}
