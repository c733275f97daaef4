use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Result of writing one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileOutcome {
    pub filename: String,
    pub size: u32,
    pub idiom: String,
    pub ok: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchReport {
    pub schema_version: u32,
    pub out_dir: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new(out_dir: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            out_dir: out_dir.into(),
            total: 0,
            succeeded: 0,
            failed: 0,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.total += 1;
        if outcome.ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.files.push(outcome);
    }

    /// True only when every attempted entry was written.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.succeeded == self.total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConvertReport {
    pub schema_version: u32,
    pub source: String,
    pub output: String,
    /// Subtype declared by the data URI, e.g. `png` or `jpeg`.
    pub format: String,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub color: String,
}
