use crate::OutputFormat;
use iconforge_core::{DEFAULT_ICONSET_DIR, GENERATOR_TABLE};
use std::path::PathBuf;

pub fn run_generate(
    out_dir: Option<PathBuf>,
    format: OutputFormat,
    use_color: bool,
) -> color_eyre::Result<()> {
    let cfg = iconforge_config::load_config().unwrap_or_default();
    let out_dir = out_dir
        .or_else(|| cfg.generate.and_then(|g| g.out_dir).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ICONSET_DIR));
    tracing::debug!(event = "generate_args", out_dir = ?out_dir, format = ?format);

    if format == OutputFormat::Text {
        crate::ui_out!("Generating {} app icons...", GENERATOR_TABLE.len());
        crate::ui_info!("Output directory: {}", out_dir.display());
    }
    let report = iconforge_services::generate_catalog(&out_dir, GENERATOR_TABLE)?;
    super::finish_batch(&report, format, use_color)
}
