//! Pull a raster image out of an SVG that carries it as a base64 data URI.

use base64::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("no base64 image found in SVG")]
    PatternNotFound,
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Payload and declared subtype of a `data:image/<format>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub payload: String,
    pub format: String,
}

impl EmbeddedImage {
    /// Decode the payload. Whitespace is dropped first since SVG writers wrap
    /// long attribute values.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, SvgError> {
        let compact: String = self
            .payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        Ok(BASE64_STANDARD.decode(compact.as_bytes())?)
    }
}

static DATA_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data:image/([^;]+);base64,([^"]+)"#).unwrap());

/// First data URI in `svg` wins.
pub fn extract_embedded_image(svg: &str) -> Result<EmbeddedImage, SvgError> {
    let caps = DATA_URI.captures(svg).ok_or(SvgError::PatternNotFound)?;
    Ok(EmbeddedImage {
        format: caps[1].to_string(),
        payload: caps[2].to_string(),
    })
}

pub fn read_embedded_image(path: &Path) -> Result<EmbeddedImage, SvgError> {
    let svg = std::fs::read_to_string(path).map_err(|source| SvgError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_embedded_image(&svg)
}
