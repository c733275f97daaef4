//! High-level orchestration layer over the imaging, rendering and SVG crates.
//! Intentionally thin: exposes stable functions used by the CLI.

pub mod batch;
pub mod convert;

pub use batch::{generate_catalog, resize_catalog, run_batch};
pub use convert::{convert_svg, describe_source};
pub use iconforge_core::{IconSpec, Result, GENERATOR_TABLE, RESIZE_TABLE};
pub use iconforge_domain::{BatchReport, ConvertReport, FileOutcome, SourceInfo};
