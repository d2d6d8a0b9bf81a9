//! Domain layer - Image records and value types

pub mod durability;
pub mod image_format;
pub mod image_object;
pub mod selector;

pub use durability::DurabilityMode;
pub use image_format::ImageFormat;
pub use image_object::{position_of, ImageObject};
pub use selector::ImageSelector;
