use iconforge_core::{APP_STORE_SIZE, DEFAULT_SOURCE_PNG, DEFAULT_SOURCE_SVG};
use std::path::PathBuf;

pub fn run_convert_svg(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    size: Option<u32>,
) -> color_eyre::Result<()> {
    let cfg = iconforge_config::load_config().unwrap_or_default();
    let convert = cfg.convert.unwrap_or_default();
    let input = input
        .or_else(|| convert.input.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_SVG));
    let output = output
        .or_else(|| convert.output.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PNG));
    let size = size.or(convert.size).unwrap_or(APP_STORE_SIZE);
    tracing::debug!(event = "convert_svg_args", input = ?input, output = ?output, size = size);

    let report = iconforge_services::convert_svg(&input, &output, size)?;
    crate::ui_ok!(
        "Converted {} to {} ({}x{})",
        report.source,
        report.output,
        report.size,
        report.size
    );
    crate::ui_out!("\n✓ Successfully converted SVG to PNG");
    crate::ui_out!("  Source: {}", report.source);
    crate::ui_out!("  Output: {}", report.output);
    Ok(())
}
