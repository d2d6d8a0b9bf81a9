//! Ways to point at one image on a shelf

use crate::domain::{position_of, ImageObject};
use crate::error::{Result, ShelfError};

/// Identifies a stored image by position or by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelector {
    Index(usize),
    Id(String),
}

impl ImageSelector {
    /// Resolve to a position in `records`
    pub fn resolve(&self, records: &[ImageObject]) -> Result<usize> {
        match self {
            ImageSelector::Index(index) => {
                if *index < records.len() {
                    Ok(*index)
                } else {
                    Err(ShelfError::IndexOutOfRange {
                        index: *index,
                        len: records.len(),
                    })
                }
            }
            ImageSelector::Id(id) => {
                position_of(records, id).ok_or_else(|| ShelfError::ImageNotFound(id.clone()))
            }
        }
    }
}
