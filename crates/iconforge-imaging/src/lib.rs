//! Thin wrappers over the `image` crate: opaque RGB normalization, square
//! Lanczos resize and PNG I/O.

use iconforge_core::{check_size, IconError, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Composite anything with an alpha channel over white; convert the rest to RGB8.
pub fn normalize(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let a = src[3] as u32;
        let over_white = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
        *dst = Rgb([over_white(src[0]), over_white(src[1]), over_white(src[2])]);
    }
    out
}

/// Resample to exactly `size x size`; the aspect ratio is not kept.
pub fn resize_square(img: &RgbImage, size: u32) -> Result<RgbImage> {
    let size = check_size(size)?;
    Ok(image::imageops::resize(img, size, size, FilterType::Lanczos3))
}

pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| IconError::Decode(e.to_string()).into())
}

pub fn open_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(IconError::SourceNotFound(path.to_path_buf()).into());
    }
    image::ImageReader::open(path)
        .map_err(|e| IconError::Decode(format!("{}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("{}: {e}", path.display())))?
        .decode()
        .map_err(|e| IconError::Decode(format!("{}: {e}", path.display())).into())
}

/// Write an opaque PNG with maximum compression, replacing any existing file.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let encode_err = |msg: String| IconError::Encode {
        path: path.to_path_buf(),
        msg,
    };
    let file = File::create(path).map_err(|e| encode_err(e.to_string()))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        PngFilter::Adaptive,
    );
    DynamicImage::ImageRgb8(img.clone())
        .write_with_encoder(encoder)
        .map_err(|e| encode_err(e.to_string()))?;
    tracing::debug!(
        event = "png_saved",
        path = %path.display(),
        width = img.width(),
        height = img.height()
    );
    Ok(())
}

/// Human-readable color mode, e.g. `Rgba8`.
pub fn color_name(img: &DynamicImage) -> String {
    format!("{:?}", img.color())
}
