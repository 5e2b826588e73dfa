pub mod import;
pub mod template;
pub mod writers;

pub use import::{import_csv_file, import_csv_reader, resolve_columns, ColumnMap};
pub use template::{template_csv, write_template, DEFAULT_TEMPLATE_NAME};
pub use writers::{create_writer, OutputFormat, OutputWriter, ReportOptions};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
