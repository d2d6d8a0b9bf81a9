//! Single-file store for an ordered record collection
//!
//! Every mutation re-encodes the whole collection and swaps the backing
//! file in one rename, so cost grows with the total stored bytes. This is
//! meant for personal-sized collections.

use crate::domain::DurabilityMode;
use crate::error::{Result, ShelfError, WriteError};
use crate::infrastructure::{atomic_write, container};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Ordered records mirrored to one backing file.
///
/// A mutation only changes the in-memory sequence once the new file is in
/// place. If the write fails, memory still matches the last persisted state.
/// Mutating calls take `&mut self`; sharing one file between several stores
/// is not supported.
#[derive(Debug)]
pub struct RecordStore<T> {
    path: PathBuf,
    durability: DurabilityMode,
    sync_dir: fn(&Path) -> io::Result<()>,
    records: Vec<T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create an empty store backed by `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_durability(path, DurabilityMode::default())
    }

    pub fn with_durability(path: impl Into<PathBuf>, durability: DurabilityMode) -> Self {
        RecordStore {
            path: path.into(),
            durability,
            sync_dir: atomic_write::sync_parent,
            records: Vec::new(),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory sequence
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the full sequence
    pub fn create(&mut self, record: T) -> Result<()> {
        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(ShelfError::Saving(e));
        }
        Ok(())
    }

    /// Read the collection from disk, replacing the in-memory sequence.
    ///
    /// On any error the in-memory sequence is left untouched.
    pub fn load_all(&mut self) -> Result<&[T]> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ShelfError::FileDoesNotExist(self.path.clone()));
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "collection unreadable");
                return Err(ShelfError::NoData(self.path.clone()));
            }
        };

        if bytes.is_empty() {
            return Err(ShelfError::NoData(self.path.clone()));
        }

        let records = container::decode(&bytes)?;
        self.records = records;

        tracing::debug!(
            path = %self.path.display(),
            records = self.records.len(),
            bytes = bytes.len(),
            "loaded collection"
        );
        Ok(&self.records)
    }

    /// Remove the record at `index` and persist; returns the removed record
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        if index >= self.records.len() {
            return Err(ShelfError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);

        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(ShelfError::Deleting(e));
        }
        Ok(removed)
    }

    /// Replace the whole sequence and persist it
    pub fn reorder(&mut self, records: Vec<T>) -> Result<()> {
        let previous = std::mem::replace(&mut self.records, records);

        if let Err(e) = self.persist() {
            self.records = previous;
            return Err(ShelfError::Reordering(e));
        }
        Ok(())
    }

    fn persist(&self) -> std::result::Result<(), WriteError> {
        let bytes = container::encode(&self.records)?;
        atomic_write::write_atomic_with(&self.path, &bytes, self.durability, self.sync_dir)?;

        tracing::debug!(
            path = %self.path.display(),
            records = self.records.len(),
            bytes = bytes.len(),
            "persisted collection"
        );
        Ok(())
    }
}
