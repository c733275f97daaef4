use std::path::PathBuf;

use thiserror::Error;

pub mod catalog;

pub use catalog::{IconSpec, Idiom, GENERATOR_TABLE, RESIZE_TABLE};

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Output directory of the iOS icon catalog, relative to the app root.
pub const DEFAULT_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// Image used as the resize source and written by the SVG conversion.
pub const DEFAULT_SOURCE_PNG: &str = "assets/images/app_icon.png";

pub const DEFAULT_SOURCE_SVG: &str = "assets/images/app_icon.svg";

/// App Store marketing size; also the SVG conversion default.
pub const APP_STORE_SIZE: u32 = 1024;

/// Largest canvas edge accepted anywhere in the pipeline.
pub const MAX_SIZE: u32 = 16384;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("invalid canvas size {0}: must be between 1 and 16384 pixels")]
    InvalidSize(u32),
    #[error("cannot decode image: {0}")]
    Decode(String),
    #[error("cannot encode {}: {msg}", .path.display())]
    Encode { path: PathBuf, msg: String },
}

/// Reject empty or oversized canvases before anything allocates a buffer.
pub fn check_size(size: u32) -> std::result::Result<u32, IconError> {
    if size == 0 || size > MAX_SIZE {
        Err(IconError::InvalidSize(size))
    } else {
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(check_size(0), Err(IconError::InvalidSize(0))));
        assert_eq!(check_size(29).unwrap(), 29);
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert_eq!(check_size(MAX_SIZE).unwrap(), MAX_SIZE);
        assert!(matches!(
            check_size(100_000),
            Err(IconError::InvalidSize(100_000))
        ));
    }

    #[test]
    fn source_not_found_mentions_path() {
        let e = IconError::SourceNotFound(PathBuf::from("nope/icon.png"));
        assert!(e.to_string().contains("nope/icon.png"));
    }
}
