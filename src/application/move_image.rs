//! Move image use case

use crate::error::{Result, ShelfError};
use crate::infrastructure::FileSystemRepository;

/// Service for changing an image's position on the shelf
pub struct MoveImageService {
    repository: FileSystemRepository,
}

impl MoveImageService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MoveImageService { repository }
    }

    /// Move the image at `from` so it ends up at `to`; images in between shift by one
    pub fn execute(&self, from: usize, to: usize) -> Result<()> {
        let mut store = self.repository.open_store()?;
        let len = store.len();

        for index in [from, to] {
            if index >= len {
                return Err(ShelfError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let mut records = store.records().to_vec();
        let moved = records.remove(from);
        records.insert(to, moved);
        store.reorder(records)?;

        tracing::info!(from, to, "moved image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageObject;
    use crate::infrastructure::{Config, ShelfRepository};
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup(count: u8) -> (TempDir, FileSystemRepository, Vec<String>) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let mut store = repo.open_store().unwrap();
        let mut ids = Vec::new();
        for i in 0..count {
            let record = ImageObject::new(vec![0xFF, 0xD8, 0xFF, i], Utc::now());
            ids.push(record.id.clone());
            store.create(record).unwrap();
        }
        (temp, repo, ids)
    }

    fn stored_ids(repo: &FileSystemRepository) -> Vec<String> {
        repo.open_store()
            .unwrap()
            .records()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn test_move_to_front() {
        let (_temp, repo, ids) = setup(3);

        MoveImageService::new(repo.clone()).execute(2, 0).unwrap();

        assert_eq!(
            stored_ids(&repo),
            vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]
        );
    }

    #[test]
    fn test_move_to_back() {
        let (_temp, repo, ids) = setup(3);

        MoveImageService::new(repo.clone()).execute(0, 2).unwrap();

        assert_eq!(
            stored_ids(&repo),
            vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn test_move_out_of_range() {
        let (_temp, repo, ids) = setup(2);

        let err = MoveImageService::new(repo.clone())
            .execute(0, 5)
            .unwrap_err();

        assert!(matches!(
            err,
            ShelfError::IndexOutOfRange { index: 5, len: 2 }
        ));
        assert_eq!(stored_ids(&repo), ids);
    }
}
