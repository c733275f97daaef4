pub mod convert_svg;
pub mod generate;
pub mod resize;
pub mod schema;

use crate::OutputFormat;
use color_eyre::eyre::eyre;
use iconforge_domain::BatchReport;

/// Print a finished batch and turn partial failure into an error (exit 1).
pub(crate) fn finish_batch(
    report: &BatchReport,
    format: OutputFormat,
    use_color: bool,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), report)?;
            println!();
        }
        OutputFormat::Text => print_batch_text(report, use_color),
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(eyre!(
            "{} of {} icons failed to generate",
            report.failed,
            report.total
        ))
    }
}

fn print_batch_text(report: &BatchReport, use_color: bool) {
    use owo_colors::OwoColorize;

    for f in &report.files {
        let dims = format!("{}x{}", f.size, f.size);
        match (&f.error, use_color) {
            (None, false) => crate::ui_out!("  ✓ Created {} ({})", f.filename, dims),
            (None, true) => {
                crate::ui_out!("  {} Created {} ({})", "✓".green(), f.filename, dims.cyan())
            }
            (Some(e), false) => crate::ui_out!("  ✗ Error creating {}: {}", f.filename, e),
            (Some(e), true) => {
                crate::ui_out!("  {} Error creating {}: {}", "✗".red(), f.filename.yellow(), e)
            }
        }
    }

    crate::ui_out!(
        "\n✓ Successfully generated {}/{} icons",
        report.succeeded,
        report.total
    );
    if report.is_success() {
        crate::ui_out!("\n✅ All icons generated successfully!");
        crate::ui_out!("  Location: {}", report.out_dir);
        crate::ui_out!("\nNext steps:");
        crate::ui_out!("  1. Verify icons in Xcode: ios/Runner.xcworkspace");
        crate::ui_out!("  2. Update App Store Connect with new 1024x1024 icon");
        crate::ui_out!("  3. Build and upload new version to App Store");
    } else {
        crate::ui_warn!("Some icons failed to generate. Please check the errors above.");
    }
}
