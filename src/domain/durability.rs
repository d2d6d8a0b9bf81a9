//! Write durability settings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How hard a persist pushes bytes toward stable storage before the
/// atomic rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// `flush()` + `sync_all()` on the temp file and a sync of the parent directory
    #[default]
    Fsync,
    /// `flush()` only; the rename is still atomic but may not survive power loss
    Flush,
}

impl DurabilityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurabilityMode::Fsync => "fsync",
            DurabilityMode::Flush => "flush",
        }
    }
}

impl FromStr for DurabilityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fsync" => Ok(DurabilityMode::Fsync),
            "flush" => Ok(DurabilityMode::Flush),
            _ => Err(format!(
                "Invalid durability: '{}'. Valid values are: fsync, flush",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_durability() {
        assert_eq!(
            DurabilityMode::from_str("fsync").unwrap(),
            DurabilityMode::Fsync
        );
        assert_eq!(
            DurabilityMode::from_str("FLUSH").unwrap(),
            DurabilityMode::Flush
        );
    }

    #[test]
    fn test_parse_invalid_durability() {
        let err = DurabilityMode::from_str("sometimes").unwrap_err();
        assert!(err.contains("Invalid durability"));
    }

    #[test]
    fn test_default_is_fsync() {
        assert_eq!(DurabilityMode::default(), DurabilityMode::Fsync);
        assert_eq!(DurabilityMode::default().as_str(), "fsync");
    }
}
