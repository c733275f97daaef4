use crate::Result;
use color_eyre::eyre::WrapErr;
use iconforge_domain::{ConvertReport, SourceInfo, SCHEMA_VERSION};
use std::path::Path;

/// Rasterize the image embedded in `svg` to an opaque `size x size` PNG.
pub fn convert_svg(svg: &Path, png: &Path, size: u32) -> Result<ConvertReport> {
    let size = iconforge_core::check_size(size)?;
    let embedded = iconforge_svg::read_embedded_image(svg)?;
    tracing::debug!(event = "svg_payload_found", format = %embedded.format, payload_len = embedded.payload.len());

    let bytes = embedded.decode_bytes()?;
    let decoded = iconforge_imaging::decode_bytes(&bytes)
        .wrap_err_with(|| format!("embedded {} image in {}", embedded.format, svg.display()))?;
    let rgb = iconforge_imaging::normalize(&decoded);
    let resized = iconforge_imaging::resize_square(&rgb, size)?;

    if let Some(parent) = png.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create {}", parent.display()))?;
    }
    iconforge_imaging::save_png(&resized, png)?;
    tracing::info!(event = "svg_converted", source = %svg.display(), output = %png.display(), size = size);

    Ok(ConvertReport {
        schema_version: SCHEMA_VERSION,
        source: svg.display().to_string(),
        output: png.display().to_string(),
        format: embedded.format,
        size,
    })
}

/// Dimensions and color mode of a source image, for the pre-batch summary.
pub fn describe_source(path: &Path) -> Result<SourceInfo> {
    let img = iconforge_imaging::open_image(path)?;
    Ok(SourceInfo {
        path: path.display().to_string(),
        width: img.width(),
        height: img.height(),
        color: iconforge_imaging::color_name(&img),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::*;
    use iconforge_svg::SvgError;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn svg_with_png(w: u32, h: u32, px: Rgba<u8>) -> String {
        let mut buf = Vec::new();
        RgbaImage::from_pixel(w, h, px)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">
  <image width="{w}" height="{h}" href="data:image/png;base64,{}"/>
</svg>"#,
            BASE64_STANDARD.encode(buf)
        )
    }

    #[test]
    fn converts_embedded_png_to_opaque_square() {
        let tmp = tempfile::tempdir().unwrap();
        let svg = tmp.path().join("app_icon.svg");
        std::fs::write(&svg, svg_with_png(40, 20, Rgba([255, 0, 0, 0]))).unwrap();
        let png = tmp.path().join("assets/images/app_icon.png");

        let report = convert_svg(&svg, &png, 64).unwrap();
        assert_eq!(report.format, "png");
        assert_eq!(report.size, 64);

        let out = iconforge_imaging::open_image(&png).unwrap();
        assert_eq!((out.width(), out.height()), (64, 64));
        assert!(!out.color().has_alpha());
        assert_eq!(out.to_rgb8().get_pixel(32, 32), &image::Rgb([255, 255, 255]));
    }

    #[test]
    fn svg_without_payload_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let svg = tmp.path().join("plain.svg");
        std::fs::write(&svg, "<svg><circle r=\"4\"/></svg>").unwrap();
        let err = convert_svg(&svg, &tmp.path().join("out.png"), 32).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SvgError>(),
            Some(SvgError::PatternNotFound)
        ));
        assert!(!tmp.path().join("out.png").exists());
    }

    #[test]
    fn describes_source_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("s.png");
        RgbaImage::new(30, 10).save(&p).unwrap();
        let info = describe_source(&p).unwrap();
        assert_eq!((info.width, info.height), (30, 10));
        assert_eq!(info.color, "Rgba8");
    }
}
