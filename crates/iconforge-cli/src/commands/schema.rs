use std::fs;
use std::path::PathBuf;

pub fn run_schema(out_dir: Option<PathBuf>) -> color_eyre::Result<()> {
    let cfg = iconforge_config::load_config().unwrap_or_default();
    let out_dir = out_dir.unwrap_or_else(|| {
        PathBuf::from(
            cfg.schema
                .and_then(|s| s.out_dir)
                .unwrap_or_else(|| "./docs/assets/schemas".to_string()),
        )
    });
    fs::create_dir_all(&out_dir)?;
    macro_rules! dump {
        ($ty:ty, $name:literal) => {{
            let schema = schemars::schema_for!($ty);
            let path = out_dir.join($name);
            let f = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(f, &schema)?;
        }};
    }
    dump!(iconforge_domain::BatchReport, "batch_report.schema.json");
    dump!(iconforge_domain::ConvertReport, "convert_report.schema.json");
    dump!(iconforge_domain::SourceInfo, "source_info.schema.json");
    crate::ui_ok!("Schemas written to {}", out_dir.display());
    Ok(())
}
