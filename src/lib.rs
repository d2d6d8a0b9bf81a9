//! snapshelf - an ordered photo shelf kept in a single file
//!
//! The persistence core is [`RecordStore`]: an ordered collection mirrored
//! to one file that is replaced atomically on every mutation. The shelf
//! repository, use-case services and CLI are layered on top of it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::ImageObject;
pub use error::ShelfError;
pub use infrastructure::RecordStore;
