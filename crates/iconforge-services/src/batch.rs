use crate::Result;
use color_eyre::eyre::{eyre, WrapErr};
use iconforge_core::{IconError, IconSpec};
use iconforge_domain::{BatchReport, FileOutcome};
use image::RgbImage;
use std::path::Path;

/// Write one PNG per table entry into `out_dir`.
///
/// Only failing to create `out_dir` aborts. A failure to produce or save an
/// entry is recorded in the report and the batch moves on to the next entry.
pub fn run_batch<F>(table: &[IconSpec], out_dir: &Path, mut produce: F) -> Result<BatchReport>
where
    F: FnMut(&IconSpec) -> Result<RgbImage>,
{
    std::fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("cannot create output directory {}", out_dir.display()))?;
    tracing::info!(event = "batch_start", entries = table.len(), out_dir = %out_dir.display());

    let mut report = BatchReport::new(out_dir.display().to_string());
    for spec in table {
        let result = produce(spec).and_then(|img| {
            if img.dimensions() != (spec.size, spec.size) {
                return Err(eyre!(
                    "produced {}x{} instead of {}x{}",
                    img.width(),
                    img.height(),
                    spec.size,
                    spec.size
                ));
            }
            iconforge_imaging::save_png(&img, &out_dir.join(spec.filename))
        });
        let error = match result {
            Ok(()) => {
                tracing::debug!(event = "icon_written", file = spec.filename, size = spec.size);
                None
            }
            Err(e) => {
                tracing::error!(event = "icon_failed", file = spec.filename, size = spec.size, error = %e);
                Some(format!("{e:#}"))
            }
        };
        report.push(FileOutcome {
            filename: spec.filename.to_string(),
            size: spec.size,
            idiom: spec.idiom.as_str().to_string(),
            ok: error.is_none(),
            error,
        });
    }

    tracing::info!(
        event = "batch_done",
        succeeded = report.succeeded,
        failed = report.failed,
        total = report.total
    );
    Ok(report)
}

/// Draw the procedural icon at every table size.
pub fn generate_catalog(out_dir: &Path, table: &[IconSpec]) -> Result<BatchReport> {
    run_batch(table, out_dir, |spec| iconforge_render::render_icon(spec.size))
}

/// Resize `source` to every table size. A missing or undecodable source is
/// fatal and nothing is written.
pub fn resize_catalog(source: &Path, out_dir: &Path, table: &[IconSpec]) -> Result<BatchReport> {
    if !source.exists() {
        return Err(IconError::SourceNotFound(source.to_path_buf()).into());
    }
    let decoded = iconforge_imaging::open_image(source)?;
    let rgb = iconforge_imaging::normalize(&decoded);
    drop(decoded);
    tracing::info!(event = "resize_source_loaded", path = %source.display(), width = rgb.width(), height = rgb.height());

    run_batch(table, out_dir, |spec| iconforge_imaging::resize_square(&rgb, spec.size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconforge_core::{Idiom, GENERATOR_TABLE, RESIZE_TABLE};
    use image::{Rgb, Rgba, RgbaImage};

    fn entry(filename: &'static str, size: u32, idiom: Idiom) -> IconSpec {
        IconSpec {
            filename,
            size,
            idiom,
        }
    }

    fn small_table() -> Vec<IconSpec> {
        vec![
            entry("a.png", 8, Idiom::Iphone),
            entry("b.png", 12, Idiom::Iphone),
            entry("c.png", 16, Idiom::Ipad),
            entry("d.png", 20, Idiom::IosMarketing),
        ]
    }

    #[test]
    fn one_failure_does_not_stop_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let table = small_table();
        let mut attempted = Vec::new();
        let report = run_batch(&table, tmp.path(), |spec| {
            attempted.push(spec.filename);
            if spec.filename == "b.png" {
                Err(eyre!("renderer exploded"))
            } else {
                Ok(RgbImage::from_pixel(spec.size, spec.size, Rgb([9, 9, 9])))
            }
        })
        .unwrap();

        assert_eq!(attempted, vec!["a.png", "b.png", "c.png", "d.png"]);
        assert_eq!(report.total, 4);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        let failed = &report.files[1];
        assert!(!failed.ok);
        assert!(failed.error.as_deref().unwrap().contains("renderer exploded"));
        assert!(!tmp.path().join("b.png").exists());
        assert!(tmp.path().join("d.png").exists());
    }

    #[test]
    fn wrong_dimensions_count_as_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let table = small_table();
        let report = run_batch(&table[..1], tmp.path(), |_| Ok(RgbImage::new(3, 3))).unwrap();
        assert_eq!(report.failed, 1);
        assert!(report.files[0].error.as_deref().unwrap().contains("3x3"));
    }

    #[test]
    fn creates_nested_output_dir_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("ios/Runner/AppIcon.appiconset");
        let table = small_table();
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("a.png"), b"stale").unwrap();

        let report = generate_catalog(&out, &table).unwrap();
        assert!(report.is_success());
        let a = iconforge_imaging::open_image(&out.join("a.png")).unwrap();
        assert_eq!((a.width(), a.height()), (8, 8));
    }

    #[test]
    fn generator_table_writes_every_size() {
        let tmp = tempfile::tempdir().unwrap();
        let report = generate_catalog(tmp.path(), GENERATOR_TABLE).unwrap();
        assert_eq!(report.total, 17);
        assert!(report.is_success(), "{:?}", report.files);
        for spec in GENERATOR_TABLE {
            let img = iconforge_imaging::open_image(&tmp.path().join(spec.filename)).unwrap();
            assert_eq!((img.width(), img.height()), (spec.size, spec.size), "{}", spec.filename);
            assert!(!img.color().has_alpha());
        }
    }

    #[test]
    fn resize_from_transparent_source() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src.png");
        RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 0])).save(&src).unwrap();
        let out = tmp.path().join("out");

        let report = resize_catalog(&src, &out, RESIZE_TABLE).unwrap();
        assert_eq!(report.succeeded, 15);
        let img = iconforge_imaging::open_image(&out.join("Icon-App-76x76@2x.png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (152, 152));
        assert_eq!(img.get_pixel(70, 70), &Rgb([255, 255, 255]));
    }

    #[test]
    fn missing_source_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let err = resize_catalog(&tmp.path().join("missing.png"), &out, RESIZE_TABLE).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IconError>(),
            Some(IconError::SourceNotFound(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn undecodable_source_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("icon.png");
        std::fs::write(&src, b"not an image at all").unwrap();
        let out = tmp.path().join("out");
        assert!(resize_catalog(&src, &out, RESIZE_TABLE).is_err());
        assert!(!out.exists());
    }
}
