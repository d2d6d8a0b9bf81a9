//! Application layer - Use cases and orchestration

pub mod add_image;
pub mod delete_image;
pub mod export_image;
pub mod init;
pub mod list_images;
pub mod manage_config;
pub mod move_image;

pub use add_image::AddImageService;
pub use delete_image::DeleteImageService;
pub use export_image::ExportImageService;
pub use list_images::{ImageSummary, ListImagesService};
pub use manage_config::ConfigService;
pub use move_image::MoveImageService;
