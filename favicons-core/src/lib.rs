pub mod config;
pub mod convert;
pub mod variant;

use std::path::PathBuf;

pub use config::{Config, ConfigLoadError};
pub use convert::{Converter, Output};
pub use variant::Variant;

pub const DEFAULT_SOURCE: &str = "dist/images/favicon.png";
pub const DEFAULT_DEST_DIR: &str = "public/images";
pub const DEFAULT_SIZES: &[u32] = &[32, 16];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source image not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("failed to create destination directory {}", .0.display())]
    CreateDestDir(PathBuf, #[source] std::io::Error),
    #[error("failed to open image {}", .0.display())]
    Open(PathBuf, #[source] std::io::Error),
    #[error("failed to decode image {}", .0.display())]
    Decode(PathBuf, #[source] image::ImageError),
    #[error("failed to write image {}", .0.display())]
    Write(PathBuf, #[source] image::ImageError),
}
