use super::import::NAME_HEADER;
use crate::core::Criterion;
use anyhow::{Context, Result};
use std::path::Path;

/// File name offered for the blank import template.
pub const DEFAULT_TEMPLATE_NAME: &str = "template_destinasi.csv";

/// Column headers in import order.
pub fn template_headers() -> [&'static str; 5] {
    [
        NAME_HEADER,
        Criterion::Distance.column_header(),
        Criterion::Cost.column_header(),
        Criterion::Facility.column_header(),
        Criterion::Rating.column_header(),
    ]
}

/// A CSV document with the header row only.
pub fn template_csv() -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(template_headers())?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to build template: {}", e.error()))
}

pub fn write_template(path: &Path) -> Result<()> {
    std::fs::write(path, template_csv()?)
        .with_context(|| format!("Failed to write template to {}", path.display()))
}
