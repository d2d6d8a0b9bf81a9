//! Stored image record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One picked or captured photo.
///
/// The `id` is generated once at construction and travels with the record
/// through every encode and decode; nothing downstream recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageObject {
    pub image_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub id: String,
}

impl ImageObject {
    /// Build a record with a fresh identifier
    pub fn new(image_data: Vec<u8>, created_at: DateTime<Utc>) -> Self {
        ImageObject {
            image_data,
            created_at,
            id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Payload size in bytes
    pub fn size(&self) -> usize {
        self.image_data.len()
    }
}

/// Find the position of the record with the given id
pub fn position_of(records: &[ImageObject], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id == id)
}
