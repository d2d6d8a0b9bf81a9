//! Infrastructure layer - External I/O and persistence

pub mod atomic_write;
pub mod config;
pub mod container;
pub mod record_store;
pub mod repository;

pub use config::Config;
pub use record_store::RecordStore;
pub use repository::{FileSystemRepository, ShelfRepository};
