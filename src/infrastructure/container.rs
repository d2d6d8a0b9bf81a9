//! On-disk container format for a record collection
//!
//! Layout (all integers little-endian):
//!
//! | Offset | Size | Field                         |
//! |--------|------|-------------------------------|
//! | 0      | 4    | magic `SNAP`                  |
//! | 4      | 4    | format version (`u32`)        |
//! | 8      | 4    | CRC32 of the body (`u32`)     |
//! | 12     | ..   | bincode-encoded `Vec<T>` body |

use crate::error::{DecodeError, WriteError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) const MAGIC: &[u8; 4] = b"SNAP";
pub(crate) const FORMAT_VERSION: u32 = 1;
pub(crate) const HEADER_LEN: usize = 12;

/// Encode a full record sequence into container bytes
pub fn encode<T: Serialize>(records: &[T]) -> Result<Vec<u8>, WriteError> {
    let body = bincode::serialize(records)?;
    let checksum = crc32fast::hash(&body);

    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&checksum.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

/// Decode container bytes back into the record sequence
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::Truncated);
    }
    if &bytes[0..4] != MAGIC {
        return Err(DecodeError::BadMagic);
    }

    let version = read_u32(&bytes[4..8]);
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let expected = read_u32(&bytes[8..12]);
    let body = &bytes[HEADER_LEN..];
    let actual = crc32fast::hash(body);
    if expected != actual {
        return Err(DecodeError::ChecksumMismatch { expected, actual });
    }

    bincode::deserialize(body).map_err(DecodeError::Body)
}

fn read_u32(slice: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(slice);
    u32::from_le_bytes(raw)
}
