use crate::OutputFormat;
use iconforge_core::{IconError, DEFAULT_ICONSET_DIR, DEFAULT_SOURCE_PNG, RESIZE_TABLE};
use std::path::PathBuf;

pub fn run_resize(
    source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    format: OutputFormat,
    use_color: bool,
) -> color_eyre::Result<()> {
    let cfg = iconforge_config::load_config().unwrap_or_default();
    let resize = cfg.resize.unwrap_or_default();
    let source = source
        .or_else(|| resize.source.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PNG));
    let out_dir = out_dir
        .or_else(|| resize.out_dir.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ICONSET_DIR));
    tracing::debug!(event = "resize_args", source = ?source, out_dir = ?out_dir, format = ?format);

    if !source.exists() {
        crate::ui_err!("Source image not found: {}", source.display());
        eprintln!("\nUsage: iconforge-cli resize [SOURCE]");
        eprintln!("Default: {}", DEFAULT_SOURCE_PNG);
        return Err(IconError::SourceNotFound(source).into());
    }

    let info = iconforge_services::describe_source(&source)?;
    tracing::info!(event = "resize_source", path = %info.path, width = info.width, height = info.height, color = %info.color);
    if format == OutputFormat::Text {
        crate::ui_out!("Source image: {}", info.path);
        crate::ui_out!("  Size: {}x{}", info.width, info.height);
        crate::ui_out!("  Mode: {}", info.color);
        crate::ui_out!(
            "\nGenerating {} app icons from source...",
            RESIZE_TABLE.len()
        );
        crate::ui_out!("Output directory: {}\n", out_dir.display());
    }

    let report = iconforge_services::resize_catalog(&source, &out_dir, RESIZE_TABLE)?;
    super::finish_batch(&report, format, use_color)
}
