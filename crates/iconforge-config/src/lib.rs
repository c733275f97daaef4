use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "iconforge.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconforgeConfig {
    pub convert: Option<ConvertCfg>,
    pub generate: Option<GenerateCfg>,
    pub resize: Option<ResizeCfg>,
    pub schema: Option<SchemaCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertCfg {
    pub input: Option<String>,
    pub output: Option<String>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateCfg {
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResizeCfg {
    pub source: Option<String>,
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaCfg {
    pub out_dir: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse a single config file body.
pub fn parse_config(text: &str, origin: &Path) -> Result<IconforgeConfig, ConfigError> {
    toml::from_str::<IconforgeConfig>(text).map_err(|source| ConfigError::Parse {
        path: origin.display().to_string(),
        source,
    })
}

/// Candidate config files, highest priority first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(p) = std::env::current_dir() {
        out.push(p.join(CONFIG_FILE));
    }
    if let Some(base) = dirs::config_dir() {
        out.push(base.join("iconforge").join(CONFIG_FILE));
    }
    out
}

pub fn load_config() -> Result<IconforgeConfig, ConfigError> {
    // Search order: CWD/iconforge.toml, $HOME/.config/iconforge/iconforge.toml
    Ok(load_config_from(&config_paths()))
}

/// Merge every readable, well-formed file in `paths`; earlier files win per field.
pub fn load_config_from(paths: &[PathBuf]) -> IconforgeConfig {
    let mut merged = IconforgeConfig::default();
    for path in paths {
        if let Ok(s) = std::fs::read_to_string(path) {
            if let Ok(cfg) = parse_config(&s, path) {
                merged = merge(merged, cfg);
            }
        }
    }
    merged
}

fn merge(mut a: IconforgeConfig, b: IconforgeConfig) -> IconforgeConfig {
    a.convert = merge_opt(a.convert, b.convert, merge_convert);
    a.generate = merge_opt(a.generate, b.generate, merge_generate);
    a.resize = merge_opt(a.resize, b.resize, merge_resize);
    a.schema = merge_opt(a.schema, b.schema, merge_schema);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_convert(mut a: ConvertCfg, b: ConvertCfg) -> ConvertCfg {
    if a.input.is_none() {
        a.input = b.input;
    }
    if a.output.is_none() {
        a.output = b.output;
    }
    if a.size.is_none() {
        a.size = b.size;
    }
    a
}
fn merge_generate(mut a: GenerateCfg, b: GenerateCfg) -> GenerateCfg {
    if a.out_dir.is_none() {
        a.out_dir = b.out_dir;
    }
    a
}
fn merge_resize(mut a: ResizeCfg, b: ResizeCfg) -> ResizeCfg {
    if a.source.is_none() {
        a.source = b.source;
    }
    if a.out_dir.is_none() {
        a.out_dir = b.out_dir;
    }
    a
}
fn merge_schema(mut a: SchemaCfg, b: SchemaCfg) -> SchemaCfg {
    if a.out_dir.is_none() {
        a.out_dir = b.out_dir;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_wins_per_field() {
        let tmp = tempfile::tempdir().unwrap();
        let local = tmp.path().join("local.toml");
        let user = tmp.path().join("user.toml");
        std::fs::write(&local, "[convert]\nsize = 512\n").unwrap();
        std::fs::write(
            &user,
            "[convert]\nsize = 256\ninput = \"art/icon.svg\"\n[resize]\nsource = \"art/icon.png\"\n",
        )
        .unwrap();

        let cfg = load_config_from(&[local, user]);
        let convert = cfg.convert.unwrap();
        assert_eq!(convert.size, Some(512));
        assert_eq!(convert.input.as_deref(), Some("art/icon.svg"));
        assert_eq!(cfg.resize.unwrap().source.as_deref(), Some("art/icon.png"));
        assert!(cfg.generate.is_none());
    }

    #[test]
    fn malformed_and_missing_files_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let bad = tmp.path().join("bad.toml");
        std::fs::write(&bad, "[generate\nout_dir = ").unwrap();
        let cfg = load_config_from(&[bad, tmp.path().join("missing.toml")]);
        assert!(cfg.generate.is_none());
        assert!(cfg.convert.is_none());
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_config("[convert]\nsize = \"x\"", Path::new("cfg.toml")).unwrap_err();
        assert!(err.to_string().contains("cfg.toml"));
    }
}
